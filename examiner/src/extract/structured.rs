//! Recovery of the structured result block.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::{error::ExtractionFailure, record::ExtractionRecord};

/// A comma whose next non-whitespace character closes an object or array.
static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*([}\]])").unwrap());

/// Locates, repairs and parses a single JSON-like object in free text.
///
/// The candidate span runs from the first `{` to the last `}` in the raw
/// text. That greedy outermost rule handles nested braces and ignores
/// anything outside the span (code-fence markers, prose), but it over-captures
/// when several unrelated `{...}` spans appear in one completion. The
/// combined span then fails to parse and is reported as a parse failure
/// rather than resolved with a balanced-brace scan.
///
/// Failures are carried inside the returned record, never thrown: the caller
/// always gets a well-formed [`ExtractionRecord`] and branches on
/// [`error`](ExtractionRecord::error).
///
/// # Examples
///
/// ```
/// use examiner::StructuredResultExtractor;
///
/// let extractor = StructuredResultExtractor::new();
/// let record = extractor.extract("```json\n{\"answer\": \"42\", \"confidence\": 0.9,}\n```");
/// assert!(record.is_parsed());
/// assert_eq!(record.answer().unwrap(), "42");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredResultExtractor;

impl StructuredResultExtractor {
    /// Creates a new extractor. The extractor is stateless; one instance can
    /// serve any number of concurrent calls.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Extracts the structured block from a raw completion.
    ///
    /// 1. Take the span from the first `{` to the last `}`. No span means
    ///    [`ExtractionFailure::NoStructuredBlock`].
    /// 2. Delete commas that directly precede a closing `}` or `]`. This is
    ///    the only repair performed.
    /// 3. Parse the span as a JSON object and merge its keys into the
    ///    record; a parse error becomes
    ///    [`ExtractionFailure::ParseFailure`] with the parser diagnostic,
    ///    and nothing is partially merged.
    pub fn extract(&self, raw: &str) -> ExtractionRecord {
        let Some(span) = outermost_brace_span(raw) else {
            return ExtractionRecord::from_failure(ExtractionFailure::NoStructuredBlock);
        };

        let repaired = repair_trailing_commas(span);
        match serde_json::from_str::<Map<String, Value>>(&repaired) {
            Ok(fields) => ExtractionRecord::from_parsed(fields),
            Err(err) => ExtractionRecord::from_failure(ExtractionFailure::ParseFailure {
                detail: err.to_string(),
            }),
        }
    }
}

/// Returns the substring from the first `{` to the last `}`, or `None` when
/// the text has no such span (including a last `}` before the first `{`).
fn outermost_brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end >= start).then(|| &raw[start..=end])
}

/// Removes commas that sit directly before a closing `}` or `]`.
///
/// Idempotent, and the only repair this pipeline performs. It is applied to
/// the whole span, string literals included, so it is lossy on pathological
/// input; callers log the raw text on failure for that reason.
fn repair_trailing_commas(span: &str) -> Cow<'_, str> {
    TRAILING_COMMA.replace_all(span, "$1")
}
