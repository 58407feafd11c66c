use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

const FENCED: &str = "<think>work through the options, eliminate two, pick the remaining one</think>\n```json\n{\"explanation\": \"process of elimination\", \"answer\": \"C\", \"confidence\": 0.8,}\n```";
const BARE: &str = "{\"answer\": \"C\", \"confidence\": 0.8}";
const PROSE: &str = "I considered the options carefully but cannot commit to a single answer here.";

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract/fenced_with_reasoning", |b| {
        b.iter(|| examiner::extract(black_box(FENCED)))
    });

    c.bench_function("extract/bare_object", |b| {
        b.iter(|| examiner::extract_structured(black_box(BARE)))
    });

    c.bench_function("extract/prose_miss", |b| {
        b.iter(|| examiner::extract_structured(black_box(PROSE)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
