//! Walks the extraction pipeline over a few representative completions.

fn main() {
    let completions = [
        // The happy path: reasoning tags plus fenced, slightly broken JSON.
        "<think>recall the formula, plug in 6 and 7</think>\n```json\n{\"answer\": \"42\", \"confidence\": 0.9,}\n```",
        // No reasoning, bare object in prose.
        "The result is {\"answer\": \"Paris\", \"confidence\": 0.99} as expected.",
        // Nothing structured at all.
        "I think the answer is yes.",
        // A brace span that is not valid JSON.
        "{not valid json}",
    ];

    for raw in completions {
        let record = examiner::extract(raw);

        println!("raw: {raw:?}");
        println!("  reasoning: {:?}", record.reasoning_process());
        println!("  answer:    {:?}", record.answer());
        println!("  confidence:{:?}", record.confidence());
        match record.error() {
            None => println!("  parsed ok"),
            Some(err) => println!("  error:     {err}"),
        }
        println!();
    }
}
