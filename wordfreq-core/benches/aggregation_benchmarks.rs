//! Performance benchmarks for the aggregation pipeline
//!
//! Run with: cargo bench --bench aggregation_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordfreq_core::{analyze, count_words, ParallelExecutor};

/// Generate a repetitive word corpus of roughly the requested byte size
fn generate_corpus(size: usize) -> String {
    let base = "lorem ipsum dolor sit amet consectetur adipiscing elit ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

fn bench_count_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_words");

    for size in [10_240, 102_400, 1_024_000] {
        let text = generate_corpus(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("chunk", size), &text, |b, text| {
            b.iter(|| count_words(black_box(text), 1));
        });
    }

    group.finish();
}

fn bench_concurrency_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrency_levels");

    let text = generate_corpus(1_024_000);
    for concurrency in [1, 2, 4, 8] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze", concurrency),
            &text,
            |b, text| {
                b.iter(|| analyze(black_box(text), 1, 10, concurrency, &ParallelExecutor).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_count_words, bench_concurrency_levels);
criterion_main!(benches);
