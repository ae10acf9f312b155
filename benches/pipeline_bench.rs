//! Benchmark for eager and lazy pipelines.
//!
//! Compares fully materializing pipelines against pull-based ones, both when
//! the whole input is needed and when only a prefix is.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqline::{eager, lazy, list_processing, nested, terminate};
use std::hint::black_box;

// =============================================================================
// Full Drain
// =============================================================================

fn benchmark_full_drain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("full_drain");

    for size in [100, 1_000, 10_000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("eager", size), &values, |bencher, values| {
            bencher.iter(|| {
                let total = list_processing!(
                    values.clone(),
                    eager::map_with(|value: u64| value + 1),
                    eager::filter_with(|value: &u64| value % 2 == 0),
                    eager::reduce_with(|sum: u64, value: u64| sum + value),
                );
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("lazy", size), &values, |bencher, values| {
            bencher.iter(|| {
                let total = list_processing!(
                    values.clone(),
                    lazy::map_with(|value: u64| value + 1),
                    lazy::filter_with(|value: &u64| value % 2 == 0),
                    eager::reduce_with(|sum: u64, value: u64| sum + value),
                );
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Prefix Only
// =============================================================================

fn benchmark_prefix(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prefix");
    let values: Vec<u64> = (0..100_000).collect();

    group.bench_function("eager_then_truncate", |bencher| {
        bencher.iter(|| {
            let mut squares = eager::map(|value: u64| value * value, values.clone());
            squares.truncate(10);
            black_box(squares)
        });
    });

    group.bench_function("lazy_max", |bencher| {
        bencher.iter(|| {
            let squares = terminate::max(10, lazy::map(|value: u64| value * value, values.iter().copied()));
            black_box(squares)
        });
    });

    group.bench_function("lazy_iterate_max", |bencher| {
        bencher.iter(|| {
            let squares = terminate::max(
                10,
                lazy::map(|value: u64| value * value, lazy::iterate(0_u64, |value: &u64| value + 1)),
            );
            black_box(squares)
        });
    });

    group.finish();
}

// =============================================================================
// Deep Flattening
// =============================================================================

fn benchmark_deep_flat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("deep_flat");

    group.bench_function("mixed_depth", |bencher| {
        bencher.iter(|| {
            let tree = nested![1, [2, [3, [4, [5, [6, [7, [8, [9, [10]]]]]]]]], 11, [12, 13]];
            let sum: i32 = lazy::deep_flat(black_box(tree)).sum();
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_full_drain, benchmark_prefix, benchmark_deep_flat);
criterion_main!(benches);
