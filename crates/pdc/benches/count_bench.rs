//! Criterion benches for c_w and p_n (group "count").
//!
//! - c_w for seeded random permutations with a warm memo.
//! - p_n for n = 5, 6 under each strategy.
//! - b-terms: memo fill vs companion-matrix power.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pdc::api::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_cw(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    for n in [8usize, 12, 16] {
        let g = Group::new(n).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counter = CosetCounter::new();
        group.bench_function(BenchmarkId::new("c_w", n), |b| {
            b.iter_batched(
                || random_permutation(&g, rng.gen()),
                |w| counter.c(&w).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_pn(c: &mut Criterion) {
    let mut group = c.benchmark_group("p_n");
    group.sample_size(10);
    for n in [5usize, 6] {
        for strategy in Strategy::ALL {
            group.bench_function(BenchmarkId::new(strategy.as_str(), n), |b| {
                b.iter(|| CosetCounter::new().p(n, strategy).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_terms(c: &mut Criterion) {
    let mut group = c.benchmark_group("b_terms");
    group.bench_function("memo_b26_60", |b| {
        b.iter(|| SequenceTable::new().b(26, 60).unwrap())
    });
    group.bench_function("matrix_power_b26_60", |b| {
        b.iter(|| term_by_matrix_power(Family::B, 26, 60).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_cw, bench_pn, bench_terms);
criterion_main!(benches);
