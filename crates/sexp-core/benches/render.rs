//! Criterion bench: convert a representative nested document.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Build a document with the shapes the renderer dispatches on: nested
/// mappings, scalar sequences, booleans, null, floats.
fn sample_document() -> String {
    let mut records = Vec::with_capacity(100);
    for i in 0..100 {
        records.push(format!(
            concat!(
                r#"{{"id": {i}, "name": "record-{i}", "active": {active}, "#,
                r#""tags": ["alpha", "beta", "gamma"], "#,
                r#""meta": {{"score": {i}.5, "parent": null}}}}"#
            ),
            i = i,
            active = i % 2 == 0
        ));
    }
    format!(r#"{{"count": 100, "records": [{}]}}"#, records.join(","))
}

fn bench_convert(c: &mut Criterion) {
    let json = sample_document();
    c.bench_function("convert_nested_document", |b| {
        b.iter(|| sexp_core::convert(black_box(&json)).unwrap())
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
