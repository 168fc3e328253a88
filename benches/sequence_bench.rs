//! Benchmark for Sequence against standard Vec.
//!
//! Measures concatenation chains, random access through deep trees and
//! search on indexed versus flat leaves.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lambars_sequence::sequence::Sequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_values(size: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.r#gen()).collect()
}

// =============================================================================
// concat Benchmark
// =============================================================================

fn benchmark_concat_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("concat_chain");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Sequence", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sequence = Sequence::new();
                for index in 0..size {
                    sequence = sequence.concat(&Sequence::uniform(1, black_box(index)));
                }
                black_box(sequence)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.extend_from_slice(&[black_box(index)]);
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark (Random Access)
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let tree = (0..size).fold(Sequence::new(), |sequence, index| {
            sequence.concat(&Sequence::uniform(1, index))
        });
        let flat = tree.compact(false);

        group.bench_with_input(BenchmarkId::new("tree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0_usize;
                for index in (0..size).step_by(7) {
                    sum += tree.get(black_box(index)).copied().unwrap_or_default();
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("flat", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0_usize;
                for index in (0..size).step_by(7) {
                    sum += flat.get(black_box(index)).copied().unwrap_or_default();
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// find Benchmark (Indexed vs Flat)
// =============================================================================

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find");

    for size in [1000, 10000] {
        let values = random_values(size);
        let flat = Sequence::from_slice(&values);
        let indexed = flat.compact(true);
        let probes: Vec<u64> = values.iter().step_by(size / 100).copied().collect();

        group.bench_with_input(BenchmarkId::new("indexed", size), &probes, |bencher, probes| {
            bencher.iter(|| {
                for probe in probes {
                    black_box(indexed.find(black_box(probe), 0).ok());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("flat", size), &probes, |bencher, probes| {
            bencher.iter(|| {
                for probe in probes {
                    black_box(flat.find(black_box(probe), 0).ok());
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// compact Benchmark
// =============================================================================

fn benchmark_compact(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compact");

    for size in [1000, 10000] {
        let values = random_values(size);
        let tree = Sequence::concat_all(
            &values
                .chunks(16)
                .map(Sequence::from_slice)
                .collect::<Vec<_>>(),
        );

        group.bench_with_input(BenchmarkId::new("flat", size), &tree, |bencher, tree| {
            bencher.iter(|| black_box(tree.compact(false)));
        });

        group.bench_with_input(BenchmarkId::new("indexed", size), &tree, |bencher, tree| {
            bencher.iter(|| black_box(tree.compact(true)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_concat_chain,
    benchmark_get,
    benchmark_find,
    benchmark_compact
);

criterion_main!(benches);
