//! Criterion benchmarks for canonicalization.
//! Focus sizes: n in {4, 8, 16, 32} cells, random-growth shapes.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use omino::canonical::{canonicalize, images};
use omino::rand::{random_polyomino, ReplayToken};

fn bench_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("canonicalize", n), &n, |b, &n| {
            let mut tok = ReplayToken { seed: 43, index: 0 };
            b.iter_batched(
                || {
                    tok.index = tok.index.wrapping_add(1);
                    random_polyomino(n, tok).unwrap()
                },
                |s| {
                    let _c = canonicalize(&s);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("images", n), &n, |b, &n| {
            let s = random_polyomino(n, ReplayToken { seed: 44, index: 0 }).unwrap();
            b.iter(|| images(&s))
        });

        group.bench_with_input(BenchmarkId::new("free_boundary_cells", n), &n, |b, &n| {
            let s = random_polyomino(n, ReplayToken { seed: 45, index: 0 }).unwrap();
            b.iter(|| s.free_boundary_cells())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_canonical);
criterion_main!(benches);
