//! Retrieval of evaluation rows.
//!
//! Rows come from a remote endpoint when one is configured and reachable;
//! otherwise a local JSON copy is used. Either way the result is filtered to
//! text-only rows, since the harness evaluates text completions.

use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::DatasetError;

/// One evaluation row. Rows are open mappings for the same reason the result
/// record is: different benchmarks carry different columns.
pub type Row = Map<String, Value>;

/// Where evaluation rows come from.
///
/// # Examples
///
/// ```no_run
/// use examiner::dataset::DatasetSource;
///
/// let source = DatasetSource::local("data/hle_test.json")
///     .with_remote("https://example.org/datasets/hle/test");
/// let rows = source.load()?;
/// # Ok::<(), examiner::error::DatasetError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetSource {
    remote_url: Option<String>,
    local_path: PathBuf,
}

impl DatasetSource {
    /// Creates a source backed only by a local JSON file containing an array
    /// of row objects.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            remote_url: None,
            local_path: path.into(),
        }
    }

    /// Adds a remote endpoint to try before the local file.
    #[must_use]
    pub fn with_remote(mut self, url: impl Into<String>) -> Self {
        self.remote_url = Some(url.into());
        self
    }

    /// Loads the rows, remote first, local on any remote failure, then
    /// filters to text-only rows.
    ///
    /// # Errors
    ///
    /// Remote failures only log a warning; an error is returned when the
    /// local fallback cannot be read or parsed either.
    pub fn load(&self) -> Result<Vec<Row>, DatasetError> {
        if let Some(url) = &self.remote_url {
            match fetch_remote(url) {
                Ok(rows) => return Ok(filter_text_only(rows)),
                Err(err) => {
                    warn!(%url, error = %err, "remote dataset fetch failed, falling back to local copy");
                }
            }
        }

        let rows = self.read_local()?;
        Ok(filter_text_only(rows))
    }

    fn read_local(&self) -> Result<Vec<Row>, DatasetError> {
        let text = fs::read_to_string(&self.local_path).map_err(|source| DatasetError::Io {
            path: self.local_path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DatasetError::Json {
            path: self.local_path.clone(),
            source,
        })
    }
}

/// Bearer token for gated datasets, taken from the environment.
///
/// Checks `HUGGINGFACE_API_KEY` first, then `HF_TOKEN`.
pub fn hf_token() -> Option<String> {
    std::env::var("HUGGINGFACE_API_KEY")
        .or_else(|_| std::env::var("HF_TOKEN"))
        .ok()
        .filter(|token| !token.is_empty())
}

fn fetch_remote(url: &str) -> Result<Vec<Row>, DatasetError> {
    let mut request = ureq::get(url);
    if let Some(token) = hf_token() {
        request = request.set("Authorization", &format!("Bearer {token}"));
    }

    let response = request.call().map_err(|source| DatasetError::Remote {
        url: url.to_string(),
        source: Box::new(source),
    })?;

    response
        .into_json::<Vec<Row>>()
        .map_err(|source| DatasetError::RemoteDecode {
            url: url.to_string(),
            source,
        })
}

/// Keeps rows whose `image` column is absent, null or empty.
fn filter_text_only(rows: Vec<Row>) -> Vec<Row> {
    let total = rows.len();
    let kept: Vec<Row> = rows.into_iter().filter(is_text_only).collect();
    debug!(total, kept = kept.len(), "filtered dataset to text-only rows");
    kept
}

fn is_text_only(row: &Row) -> bool {
    match row.get("image") {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(pairs: Value) -> Row {
        pairs.as_object().unwrap().clone()
    }

    #[test]
    fn test_text_only_filter() {
        let rows = vec![
            row(json!({"id": 1, "question": "q1"})),
            row(json!({"id": 2, "question": "q2", "image": ""})),
            row(json!({"id": 3, "question": "q3", "image": null})),
            row(json!({"id": 4, "question": "q4", "image": "data:image/png;base64,AAAA"})),
        ];

        let kept = filter_text_only(rows);
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|r| r.get("id") != Some(&json!(4))));
    }

    #[test]
    fn test_local_load() {
        let dir = std::env::temp_dir().join(format!("examiner-dataset-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rows.json");
        std::fs::write(
            &path,
            r#"[{"question": "text-only"}, {"question": "with image", "image": "x"}]"#,
        )
        .unwrap();

        let rows = DatasetSource::local(&path).load().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("question"), Some(&json!("text-only")));
    }

    #[test]
    fn test_local_load_missing_file() {
        let source = DatasetSource::local("/nonexistent/examiner-rows.json");
        let err = source.load().unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_local_load_not_an_array() {
        let dir = std::env::temp_dir().join(format!("examiner-dataset-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rows.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = DatasetSource::local(&path).load().unwrap_err();
        assert!(matches!(err, DatasetError::Json { .. }));
    }
}
