//! The result record produced by the extraction pipeline.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::ExtractionFailure;

/// Structured snapshot of one model completion.
///
/// The record is an open mapping: it is seeded with the semantic keys
/// `explanation`, `answer` and `confidence` (all absent until a structured
/// block is parsed), and any key found in the parsed block is merged in,
/// including keys outside that initial set. Values are dynamically typed
/// because models return strings, numbers and nested structure
/// interchangeably.
///
/// A record is a snapshot of one raw completion. It is constructed once,
/// returned, and never mutated afterwards; a parsed mapping and an
/// [`ExtractionFailure`] are mutually exclusive, while the reasoning block is
/// orthogonal to both.
///
/// # Examples
///
/// ```
/// use examiner::extract_structured;
///
/// let record = extract_structured(r#"{"answer": "42", "confidence": 0.9}"#);
/// assert!(record.is_parsed());
/// assert_eq!(record.answer().unwrap(), "42");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRecord {
    reasoning_process: Option<String>,
    fields: Map<String, Value>,
    error: Option<ExtractionFailure>,
}

impl ExtractionRecord {
    /// Creates a record from a successfully parsed structured block.
    #[inline]
    pub fn from_parsed(fields: Map<String, Value>) -> Self {
        Self {
            reasoning_process: None,
            fields,
            error: None,
        }
    }

    /// Creates a record for a completion whose structured portion could not
    /// be recovered. The semantic fields stay absent; nothing is partially
    /// merged from malformed data.
    #[inline]
    pub fn from_failure(error: ExtractionFailure) -> Self {
        Self {
            reasoning_process: None,
            fields: Map::new(),
            error: Some(error),
        }
    }

    /// Attaches (or clears) the reasoning block found in the same raw text.
    ///
    /// The reasoning extractor runs independently of the structured one, so
    /// this is how the composing caller joins the two results.
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: Option<String>) -> Self {
        self.reasoning_process = reasoning;
        self
    }

    /// The trimmed content of the first reasoning block, if one was found.
    #[inline]
    pub fn reasoning_process(&self) -> Option<&str> {
        self.reasoning_process.as_deref()
    }

    /// The `explanation` field of the parsed block, if present.
    #[inline]
    pub fn explanation(&self) -> Option<&Value> {
        self.fields.get("explanation")
    }

    /// The `answer` field of the parsed block, if present.
    #[inline]
    pub fn answer(&self) -> Option<&Value> {
        self.fields.get("answer")
    }

    /// The `confidence` field of the parsed block, if present.
    #[inline]
    pub fn confidence(&self) -> Option<&Value> {
        self.fields.get("confidence")
    }

    /// Looks up any key the parsed block carried, semantic or otherwise.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All merged fields, in the order the parsed block listed them.
    #[inline]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The failure diagnosis for the structured portion, if extraction or
    /// parsing failed.
    #[inline]
    pub fn error(&self) -> Option<&ExtractionFailure> {
        self.error.as_ref()
    }

    /// True when a structured block was found and parsed.
    #[inline]
    pub fn is_parsed(&self) -> bool {
        self.error.is_none()
    }
}

impl Serialize for ExtractionRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        // Parsed keys win on collision, matching the merge order of the
        // pipeline (reasoning is attached before the block is merged over it).
        if let Some(reasoning) = &self.reasoning_process {
            if !self.fields.contains_key("reasoning_process") {
                map.serialize_entry("reasoning_process", reasoning)?;
            }
        }
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        if let Some(error) = &self.error {
            map.serialize_entry("error", &error.to_string())?;
        }
        map.end()
    }
}
