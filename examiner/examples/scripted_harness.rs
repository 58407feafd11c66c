//! Runs the full harness loop against a scripted completion backend.
//!
//! The backend here is a closure standing in for a real inference engine;
//! anything implementing `Generator` plugs into the same loop.

use examiner::error::GenerateError;
use examiner::generate::SamplingParams;
use examiner::harness::Harness;
use serde_json::json;

fn main() {
    let backend = |prompt: &str, _params: &SamplingParams| -> Result<String, GenerateError> {
        // A canned completion that echoes the prompt into the explanation.
        Ok(format!(
            "<think>answering: {prompt}</think>\n{{\"explanation\": \"scripted\", \"answer\": \"A\", \"confidence\": 0.5}}"
        ))
    };

    let params = SamplingParams {
        max_new_tokens: 256,
        temperature: 0.7,
    };
    let harness = Harness::new(backend, params);

    let rows: Vec<_> = [
        json!({"question": "Which gas makes up most of Earth's atmosphere?"}),
        json!({"question": "What is 6 x 7?"}),
    ]
    .iter()
    .map(|v| v.as_object().unwrap().clone())
    .collect();

    let records = harness
        .run("Q: {question}\nRespond with a JSON object.", &rows)
        .expect("scripted backend never fails");

    for (row, record) in rows.iter().zip(&records) {
        println!("question: {}", row["question"]);
        println!("  record: {}", serde_json::to_string(record).unwrap());
    }
}
