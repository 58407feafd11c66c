//! YAML configuration and prompt-template loading.
//!
//! Experiment parameters live in a single YAML file with upper-case keys
//! (`MODEL_NAME`, `MAX_LENGTH`, ...); prompt templates are one-key YAML files
//! under a prompts directory, looked up by name without the `.yml` suffix.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Experiment parameters loaded from the main configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct HarnessConfig {
    /// Model identifier handed to the completion backend.
    pub model_name: String,
    /// Dataset identifier handed to the row source.
    pub dataset_name: String,
    /// Dataset split to evaluate.
    #[serde(default = "default_split")]
    pub dataset_split: String,
    /// Upper bound on newly generated tokens per completion.
    pub max_length: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Directory holding prompt-template files. Relative paths are resolved
    /// by the caller.
    #[serde(default)]
    pub prompt_dir: Option<PathBuf>,
}

fn default_split() -> String {
    "test".to_string()
}

/// Loads the main configuration from a YAML file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read and
/// [`ConfigError::Yaml`] when it does not deserialize into
/// [`HarnessConfig`].
pub fn load_config(path: impl AsRef<Path>) -> Result<HarnessConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Shape of a prompt-template file: a YAML mapping with one meaningful key.
#[derive(Debug, Deserialize)]
struct PromptFile {
    prompt_template: Option<String>,
}

/// Loads a prompt template by name from the given directory.
///
/// `name` is the file stem; `<dir>/<name>.yml` must be a YAML mapping with a
/// `prompt_template` key holding the template string.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] / [`ConfigError::Yaml`] for unreadable or
/// malformed files, and [`ConfigError::MissingTemplate`] when the file
/// parses but has no `prompt_template` key.
pub fn load_prompt_template(dir: impl AsRef<Path>, name: &str) -> Result<String, ConfigError> {
    let path = dir.as_ref().join(format!("{name}.yml"));
    let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let file: PromptFile = serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
        path: path.clone(),
        source,
    })?;
    file.prompt_template
        .ok_or(ConfigError::MissingTemplate { path })
}
