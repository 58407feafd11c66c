//! # examiner
//!
//! An experiment harness for language-model evaluations. The model call is a
//! library call; the hard part is turning a free-form completion (reasoning
//! tags, code fences, stray prose, slightly broken JSON) into a reliable
//! structured record. That extraction pipeline is the core of this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! let raw = "<think> reasoning here </think>\n```json\n{\"answer\": \"42\", \"confidence\": 0.9,}\n```";
//!
//! let record = examiner::extract(raw);
//!
//! assert_eq!(record.reasoning_process(), Some("reasoning here"));
//! assert_eq!(record.answer().unwrap(), "42");
//! assert!(record.is_parsed());
//! ```
//!
//! ## Design
//!
//! - **Two independent stages**: [`ReasoningExtractor`] finds the optional
//!   `<think>` block, [`StructuredResultExtractor`] finds and parses the
//!   JSON-like object. Each is a pure function of the raw text; they are
//!   composed by the caller, not nested.
//! - **Failures are data**: a completion with no recoverable structure still
//!   yields a well-formed [`ExtractionRecord`] whose
//!   [`error`](ExtractionRecord::error) field says why. Nothing is thrown
//!   across the extraction boundary.
//! - **Open records**: parsed blocks merge into a dynamic mapping, so keys
//!   beyond `explanation` / `answer` / `confidence` survive untouched.
//!
//! Around the core sit the harness pieces: YAML configuration and prompt
//! templates ([`config`]), evaluation-row retrieval with a local fallback
//! ([`dataset`]), the completion-backend interface ([`generate`]) and the
//! orchestration loop ([`harness`]).

pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod generate;
pub mod harness;
pub mod record;

pub use error::ExtractionFailure;
pub use extract::{ReasoningExtractor, StructuredResultExtractor, DEFAULT_REASONING_TAG};
pub use record::ExtractionRecord;

/// Extracts the reasoning block from a raw completion using the default
/// `<think>` tag.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     examiner::extract_reasoning("<think>step one</think>rest"),
///     Some("step one".to_string())
/// );
/// assert_eq!(examiner::extract_reasoning("no tags here"), None);
/// ```
pub fn extract_reasoning(raw: &str) -> Option<String> {
    extract::default_extractor().extract(raw)
}

/// Extracts the structured block from a raw completion.
///
/// # Examples
///
/// ```
/// let record = examiner::extract_structured("I think the answer is yes.");
/// assert!(!record.is_parsed());
/// ```
pub fn extract_structured(raw: &str) -> ExtractionRecord {
    StructuredResultExtractor::new().extract(raw)
}

/// Runs both extractors over the same raw text and joins the results.
///
/// The reasoning block and the structured block are located independently;
/// the structured search always scans the full text, not the remainder after
/// reasoning removal.
///
/// # Examples
///
/// ```
/// let record = examiner::extract("<think>hm</think>{\"answer\": true}");
/// assert_eq!(record.reasoning_process(), Some("hm"));
/// assert_eq!(record.answer(), Some(&serde_json::json!(true)));
/// ```
pub fn extract(raw: &str) -> ExtractionRecord {
    extract_structured(raw).with_reasoning(extract_reasoning(raw))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_composes_both_stages() {
        let raw = "<think> reasoning here </think>\n```json\n{\"answer\": \"42\", \"confidence\": 0.9,}\n```";
        let record = extract(raw);

        assert_eq!(record.reasoning_process(), Some("reasoning here"));
        assert_eq!(record.answer(), Some(&json!("42")));
        assert_eq!(record.confidence(), Some(&json!(0.9)));
        assert!(record.is_parsed());
    }

    #[test]
    fn test_reasoning_present_despite_parse_failure() {
        let raw = "<think>solid reasoning</think>{broken json}";
        let record = extract(raw);

        assert_eq!(record.reasoning_process(), Some("solid reasoning"));
        assert!(matches!(
            record.error(),
            Some(ExtractionFailure::ParseFailure { .. })
        ));
    }

    #[test]
    fn test_structured_search_ignores_reasoning_boundaries() {
        // The structured scan covers the full text, so a block inside the
        // reasoning tags is still found.
        let raw = "<think>maybe {\"answer\": \"inner\"} fits</think>no block after";
        let record = extract(raw);

        assert!(record.is_parsed());
        assert_eq!(record.answer(), Some(&json!("inner")));
    }

    #[test]
    fn test_prose_only_completion() {
        let record = extract("I think the answer is yes.");
        assert_eq!(record.reasoning_process(), None);
        assert_eq!(record.error(), Some(&ExtractionFailure::NoStructuredBlock));
    }
}
