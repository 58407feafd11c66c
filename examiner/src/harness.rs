//! Orchestration: generate a completion, extract a record.

use serde_json::Value;
use tracing::warn;

use crate::{
    dataset::Row,
    error::GenerateError,
    extract::{ReasoningExtractor, StructuredResultExtractor},
    generate::{Generator, SamplingParams},
    record::ExtractionRecord,
};

/// Runs prompts through a completion backend and turns each raw completion
/// into an [`ExtractionRecord`].
///
/// The two extractors are run independently over the same raw text and their
/// results joined here; neither sees the other's output. Generation failures
/// propagate as errors, extraction failures travel inside the record.
#[derive(Debug)]
pub struct Harness<G> {
    generator: G,
    params: SamplingParams,
    reasoning: ReasoningExtractor,
    structured: StructuredResultExtractor,
}

impl<G: Generator> Harness<G> {
    /// Creates a harness with the default `<think>` reasoning tag.
    pub fn new(generator: G, params: SamplingParams) -> Self {
        Self {
            generator,
            params,
            reasoning: ReasoningExtractor::new(),
            structured: StructuredResultExtractor::new(),
        }
    }

    /// Switches to a custom reasoning tag.
    #[must_use]
    pub fn with_reasoning_tag(mut self, tag: &str) -> Self {
        self.reasoning = ReasoningExtractor::with_tag(tag);
        self
    }

    /// Generates one completion and extracts its record.
    ///
    /// When the structured portion cannot be recovered, the raw completion
    /// is logged next to the diagnosis; the repair heuristic is lossy, so a
    /// human may need the original text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when the backend fails; extraction itself
    /// never errors.
    pub fn complete(&self, prompt: &str) -> Result<ExtractionRecord, GenerateError> {
        let raw = self.generator.generate(prompt, &self.params)?;

        let record = self
            .structured
            .extract(&raw)
            .with_reasoning(self.reasoning.extract(&raw));

        if let Some(error) = record.error() {
            warn!(%error, raw_completion = %raw, "structured extraction failed");
        }

        Ok(record)
    }

    /// Renders the template for each row and collects one record per row, in
    /// row order.
    ///
    /// # Errors
    ///
    /// Stops at the first backend failure.
    pub fn run(&self, template: &str, rows: &[Row]) -> Result<Vec<ExtractionRecord>, GenerateError> {
        rows.iter()
            .map(|row| self.complete(&render_prompt(template, row)))
            .collect()
    }
}

/// Substitutes `{key}` placeholders in a template with row fields.
///
/// String values are inserted as-is; other value types are rendered as JSON.
/// Placeholders with no matching row key are left untouched.
///
/// # Examples
///
/// ```
/// use examiner::harness::render_prompt;
/// use serde_json::{json, Map};
///
/// let mut row = Map::new();
/// row.insert("question".to_string(), json!("What is 6 x 7?"));
/// assert_eq!(
///     render_prompt("Q: {question}\nA:", &row),
///     "Q: What is 6 x 7?\nA:"
/// );
/// ```
pub fn render_prompt(template: &str, row: &Row) -> String {
    let mut prompt = template.to_string();
    for (key, value) in row {
        let placeholder = format!("{{{key}}}");
        if !prompt.contains(&placeholder) {
            continue;
        }
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        prompt = prompt.replace(&placeholder, &rendered);
    }
    prompt
}
