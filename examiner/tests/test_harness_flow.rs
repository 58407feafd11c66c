//! The full experiment flow: config, prompt template, rows, generation,
//! extraction.

use std::fs;
use std::path::PathBuf;

use examiner::{
    config::{load_config, load_prompt_template},
    dataset::DatasetSource,
    error::GenerateError,
    generate::SamplingParams,
    harness::Harness,
};
use serde_json::json;

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("examiner-flow-{label}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_config_to_records() {
    let dir = scratch_dir("e2e");

    fs::write(
        dir.join("parameters.yml"),
        "MODEL_NAME: test/tiny\nDATASET_NAME: local/sample\nMAX_LENGTH: 128\nTEMPERATURE: 0.0\n",
    )
    .unwrap();
    fs::write(
        dir.join("em_system_prompt.yml"),
        "prompt_template: \"Question: {question}\\nRespond with JSON.\"\n",
    )
    .unwrap();
    fs::write(
        dir.join("rows.json"),
        r#"[
            {"question": "2+2?"},
            {"question": "capital of France?", "image": ""},
            {"question": "describe this chart", "image": "base64data"}
        ]"#,
    )
    .unwrap();

    let config = load_config(dir.join("parameters.yml")).unwrap();
    let template = load_prompt_template(&dir, "em_system_prompt").unwrap();
    let rows = DatasetSource::local(dir.join("rows.json")).load().unwrap();

    // The image-bearing row is filtered out.
    assert_eq!(rows.len(), 2);

    let backend = |prompt: &str, params: &SamplingParams| -> Result<String, GenerateError> {
        assert_eq!(params.max_new_tokens, 128);
        assert!(prompt.starts_with("Question: "));
        Ok(format!(
            "<think>considering</think>{{\"answer\": \"stub\", \"prompt_len\": {}}}",
            prompt.len()
        ))
    };

    let harness = Harness::new(backend, SamplingParams::from(&config));
    let records = harness.run(&template, &rows).unwrap();

    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(record.is_parsed());
        assert_eq!(record.reasoning_process(), Some("considering"));
        assert_eq!(record.answer(), Some(&json!("stub")));
        assert!(record.get("prompt_len").is_some());
    }
}

#[test]
fn test_backend_failure_stops_run() {
    let backend = |_: &str, _: &SamplingParams| -> Result<String, GenerateError> {
        Err(GenerateError::new("model not loaded"))
    };
    let harness = Harness::new(
        backend,
        SamplingParams {
            max_new_tokens: 8,
            temperature: 0.0,
        },
    );

    let rows = vec![json!({"question": "q"}).as_object().unwrap().clone()];
    let err = harness.run("{question}", &rows).unwrap_err();
    assert!(err.to_string().contains("model not loaded"));
}
