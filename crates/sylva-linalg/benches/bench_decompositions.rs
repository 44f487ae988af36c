use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use faer::Mat;
use rand::{rngs::StdRng, SeedableRng};
use sylva_linalg::{Matrix, Vector};

const SIZES: [usize; 3] = [4, 16, 32];

fn random_pair(n: usize) -> (Matrix, Mat<f64>) {
    let mut rng = StdRng::seed_from_u64(42);
    let a1 = Matrix::random(n, n, &mut rng);
    let a2 = Mat::from_fn(n, n, |i, j| a1.as_slice()[i * n + j]);
    (a1, a2)
}

fn bench_lu(c: &mut Criterion) {
    let mut group = c.benchmark_group("lu");
    for n in SIZES {
        let (a1, a2) = random_pair(n);
        group.bench_with_input(BenchmarkId::new("lu", n), &a1, |b, a| {
            b.iter(|| black_box(a.lu()))
        });
        group.bench_with_input(BenchmarkId::new("lu_faer", n), &a2, |b, a| {
            b.iter(|| black_box(a.partial_piv_lu()))
        });
    }
    group.finish();
}

fn bench_qr(c: &mut Criterion) {
    let mut group = c.benchmark_group("qr");
    for n in SIZES {
        let (a1, a2) = random_pair(n);
        group.bench_with_input(BenchmarkId::new("qr", n), &a1, |b, a| {
            b.iter(|| black_box(a.qr()))
        });
        group.bench_with_input(BenchmarkId::new("qr_faer", n), &a2, |b, a| {
            b.iter(|| black_box(a.qr()))
        });
    }
    group.finish();
}

fn bench_svd(c: &mut Criterion) {
    let mut group = c.benchmark_group("svd");
    group.sample_size(20);
    for n in [4, 16] {
        let (a1, a2) = random_pair(n);
        group.bench_with_input(BenchmarkId::new("svd", n), &a1, |b, a| {
            b.iter(|| black_box(a.svd()))
        });
        group.bench_with_input(BenchmarkId::new("svd_faer", n), &a2, |b, a| {
            b.iter(|| black_box(a.svd()))
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for n in SIZES {
        let (a1, _) = random_pair(n);
        let rhs = Vector::new((0..n).map(|i| i as f64).collect());
        group.bench_with_input(BenchmarkId::new("solve", n), &a1, |b, a| {
            b.iter(|| black_box(a.solve(&rhs)))
        });
        group.bench_with_input(BenchmarkId::new("inverse", n), &a1, |b, a| {
            b.iter(|| black_box(a.inverse()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lu, bench_qr, bench_svd, bench_solve);
criterion_main!(benches);
