//! Normalization throughput benchmark.
//!
//! Measures how fast a raw submission document goes from text to the
//! canonical record. Batch runs touch every file in the submissions
//! directory, so parse + normalize is the whole cost of a run.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `parse_normalize` | Full text → canonical record, by claim count |
//! | `instruction_cleanup` | Normalize alone on a pre-parsed record |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench normalization_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use subfix::loader;
use subfix::normalizer::{self, RawSubmission};

/// Build a YAML document with `claims` claims of numbered, period-terminated
/// instructions, so every entry takes the full cleanup path.
fn synthetic_document(claims: usize) -> String {
    let mut doc = String::from(
        "username: bench\npaper_title: Benchmarked Paper\n\
         paper_pdf: https://example.org/paper.pdf\nidentifier: sub-bench\nclaims:\n",
    );
    for claim in 0..claims {
        doc.push_str(&format!("- claim: claim number {claim}\n  instruction:\n"));
        for step in 0..4 {
            doc.push_str(&format!("  - \"{}. Run step {step} of claim {claim}.\"\n", step + 1));
        }
    }
    doc
}

fn parse_normalize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_normalize");

    for claims in [1usize, 8, 64] {
        let doc = synthetic_document(claims);
        group.throughput(Throughput::Elements(claims as u64));
        group.bench_with_input(BenchmarkId::new("claims", claims), &doc, |b, doc| {
            b.iter(|| {
                let raw: RawSubmission = loader::parse_document(black_box(doc)).unwrap();
                black_box(normalizer::normalize(raw))
            })
        });
    }

    group.finish();
}

fn instruction_cleanup_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("instruction_cleanup");

    let doc = synthetic_document(16);
    group.throughput(Throughput::Elements(16));
    group.bench_with_input(BenchmarkId::new("claims", 16), &doc, |b, doc| {
        b.iter_batched(
            || loader::parse_document::<RawSubmission>(doc).unwrap(),
            |raw| black_box(normalizer::normalize(raw)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, parse_normalize_bench, instruction_cleanup_bench);
criterion_main!(benches);
