//! Isolation of the free-text reasoning block.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tag name models conventionally use for their reasoning block.
pub const DEFAULT_REASONING_TAG: &str = "think";

static DEFAULT_EXTRACTOR: Lazy<ReasoningExtractor> = Lazy::new(ReasoningExtractor::new);

/// Shared extractor for the default `<think>` tag.
pub(crate) fn default_extractor() -> &'static ReasoningExtractor {
    &DEFAULT_EXTRACTOR
}

/// Extracts the first delimited reasoning block from a raw completion.
///
/// The block is delimited by `<tag>...</tag>`, may span multiple lines, and
/// may contain any characters including other tag-like text. Matching is
/// first-match-wins: the first opening tag paired with the first closing tag
/// after it. Nested or repeated blocks are not interpreted; only that first
/// pair is used.
///
/// A missing or malformed pair is a normal, silent outcome: extraction
/// never fails, it just returns `None`.
///
/// # Examples
///
/// ```
/// use examiner::ReasoningExtractor;
///
/// let extractor = ReasoningExtractor::new();
/// assert_eq!(
///     extractor.extract("<think>step one</think>rest"),
///     Some("step one".to_string())
/// );
/// assert_eq!(extractor.extract("no tags here"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ReasoningExtractor {
    pattern: Regex,
}

impl Default for ReasoningExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReasoningExtractor {
    /// Creates an extractor for the default `<think>` tag.
    pub fn new() -> Self {
        Self::with_tag(DEFAULT_REASONING_TAG)
    }

    /// Creates an extractor for a custom tag name.
    ///
    /// # Examples
    ///
    /// ```
    /// use examiner::ReasoningExtractor;
    ///
    /// let extractor = ReasoningExtractor::with_tag("scratchpad");
    /// assert_eq!(
    ///     extractor.extract("<scratchpad>hm</scratchpad>"),
    ///     Some("hm".to_string())
    /// );
    /// ```
    pub fn with_tag(tag: &str) -> Self {
        let escaped = regex::escape(tag);
        // (?s) lets the block span lines; .*? stops at the first closing tag.
        let pattern = Regex::new(&format!("(?s)<{escaped}>(.*?)</{escaped}>")).unwrap();
        Self { pattern }
    }

    /// Returns the trimmed interior of the first reasoning block, or `None`
    /// if no opening/closing pair exists.
    pub fn extract(&self, raw: &str) -> Option<String> {
        self.pattern
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}
