//! Benchmarks for list parsing and merge throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use bogonup::merge::merge;
use bogonup::parser::parse_entries;

/// Generate raw list text with comments interleaved
fn generate_raw_list(count: usize) -> String {
    let mut out = String::from("; generated list\n");
    for i in 0..count {
        let a = (i % 200) as u8;
        let b = ((i / 200) % 256) as u8;
        let c = ((i / 51200) % 256) as u8;
        out.push_str(&format!("{}.{}.{}.0/24 ; entry {}\n", a, b, c, i));
    }
    out
}

/// Generate per-source entry lists with roughly 50% overlap
fn generate_lists(count: usize) -> Vec<Vec<String>> {
    let first: Vec<String> = (0..count)
        .map(|i| format!("10.{}.{}.0/24", (i / 256) % 256, i % 256))
        .collect();
    let second: Vec<String> = (count / 2..count + count / 2)
        .map(|i| format!("10.{}.{}.0/24", (i / 256) % 256, i % 256))
        .collect();
    vec![first, second]
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_entries");
    for size in [1_000, 10_000, 100_000] {
        let raw = generate_raw_list(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| parse_entries(black_box(raw), "bench").unwrap());
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for size in [1_000, 10_000, 100_000] {
        let lists = generate_lists(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &lists, |b, lists| {
            b.iter(|| merge(black_box(lists.clone())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_merge);
criterion_main!(benches);
