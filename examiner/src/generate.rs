//! The completion-backend interface.
//!
//! Model loading and token generation live outside this crate. The harness
//! only needs a capability that turns a prompt plus sampling parameters into
//! raw text; anything satisfying [`Generator`] will do, whether an HTTP
//! client, a local inference engine, or a scripted closure in tests.

use crate::{config::HarnessConfig, error::GenerateError};

/// Sampling parameters forwarded to the completion backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Upper bound on newly generated tokens.
    pub max_new_tokens: u32,
    /// Sampling temperature; zero means greedy decoding.
    pub temperature: f32,
}

impl From<&HarnessConfig> for SamplingParams {
    fn from(config: &HarnessConfig) -> Self {
        Self {
            max_new_tokens: config.max_length,
            temperature: config.temperature,
        }
    }
}

/// A capability that produces raw completion text for a prompt.
pub trait Generator {
    /// Generates a completion for `prompt` under the given sampling
    /// parameters, returning the raw text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when the backend cannot produce text.
    fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String, GenerateError>;
}

/// Closures are generators; this keeps tests and one-off scripts ergonomic.
impl<F> Generator for F
where
    F: Fn(&str, &SamplingParams) -> Result<String, GenerateError>,
{
    fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String, GenerateError> {
        self(prompt, params)
    }
}
