//! Error types for the extraction pipeline and the surrounding harness.

use std::path::PathBuf;

/// Why the structured portion of a completion could not be recovered.
///
/// These are not raised across the extractor boundary. They travel inside the
/// returned [`ExtractionRecord`](crate::record::ExtractionRecord) so the
/// caller always receives a well-formed record and branches on the error
/// field. Both outcomes are recoverable by retrying the upstream generation,
/// never by retrying the extractor on the same text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionFailure {
    /// The completion contains no `{...}` span at all.
    #[error("no structured block found in the completion")]
    NoStructuredBlock,

    /// A brace-delimited span was found but did not parse as a JSON object,
    /// even after trailing-comma repair.
    #[error("structured block failed to parse: {detail}")]
    ParseFailure {
        /// The underlying parser diagnostic, kept for observability.
        detail: String,
    },
}

/// Errors from loading configuration or prompt templates.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid YAML for the expected shape.
    #[error("failed to parse YAML at {}: {source}", path.display())]
    Yaml {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A prompt file parsed fine but carries no `prompt_template` key.
    #[error("no prompt_template key in {}", path.display())]
    MissingTemplate {
        /// Path of the offending prompt file.
        path: PathBuf,
    },
}

/// Errors from retrieving evaluation rows.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The remote endpoint could not be reached or answered with an error.
    #[error("failed to fetch rows from {url}: {source}")]
    Remote {
        /// Endpoint that was queried.
        url: String,
        /// Underlying transport error.
        #[source]
        source: Box<ureq::Error>,
    },

    /// The remote endpoint answered but the body was not a JSON row array.
    #[error("failed to decode rows from {url}: {source}")]
    RemoteDecode {
        /// Endpoint that was queried.
        url: String,
        /// Underlying decode error.
        #[source]
        source: std::io::Error,
    },

    /// The local fallback file could not be read.
    #[error("failed to read local dataset {}: {source}", path.display())]
    Io {
        /// Path of the local dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The local fallback file is not a JSON row array.
    #[error("failed to parse local dataset {}: {source}", path.display())]
    Json {
        /// Path of the local dataset file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Error from the completion backend behind the [`Generator`] trait.
///
/// The backend is an external collaborator; whatever it reports is carried
/// as an opaque message.
///
/// [`Generator`]: crate::generate::Generator
#[derive(Debug, Clone, thiserror::Error)]
#[error("completion backend failed: {message}")]
pub struct GenerateError {
    /// Backend-reported failure description.
    pub message: String,
}

impl GenerateError {
    /// Creates a new generation error from any displayable message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
