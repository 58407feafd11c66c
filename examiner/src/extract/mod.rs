//! The output-extraction pipeline.
//!
//! Completions come back as free text: the answer may be wrapped in
//! reasoning tags, code fences, surrounding prose, or slightly malformed
//! JSON. This module recovers a structured record from that text in two
//! independent stages:
//!
//! - [`ReasoningExtractor`] isolates the optional free-text reasoning block.
//! - [`StructuredResultExtractor`] locates one JSON-like object, repairs
//!   trailing commas, parses it, and merges it into an
//!   [`ExtractionRecord`](crate::record::ExtractionRecord).
//!
//! Both stages are pure functions of their input text and share no state, so
//! they can run concurrently without coordination. The composing caller
//! (see [`extract`](crate::extract())) runs both over the same raw text and
//! joins the results.

mod reasoning;
mod structured;

pub use reasoning::{ReasoningExtractor, DEFAULT_REASONING_TAG};
pub use structured::StructuredResultExtractor;

pub(crate) use reasoning::default_extractor;
