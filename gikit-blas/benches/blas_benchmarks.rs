use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gikit_blas::{level1, level2, level3, Diag, Transpose, Uplo};
use gikit_core::stride::{packed_index, packed_len};

fn bench_ddot(c: &mut Criterion) {
    let mut group = c.benchmark_group("ddot");
    for &n in &[64, 256, 1024, 4096, 16384] {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
        let y: Vec<f64> = (0..n).map(|i| i as f64 * 0.002).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| level1::ddot(n, &x, 1, &y, 1));
        });
    }
    group.finish();
}

fn bench_dnrm2(c: &mut Criterion) {
    let mut group = c.benchmark_group("dnrm2");
    for &n in &[64, 1024, 16384] {
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin()).collect();
        group.bench_with_input(BenchmarkId::new("contiguous", n), &n, |b, &n| {
            b.iter(|| level1::dnrm2(n, &x, 1));
        });
        group.bench_with_input(BenchmarkId::new("reversed", n), &n, |b, &n| {
            b.iter(|| level1::dnrm2(n, &x, -1));
        });
    }
    group.finish();
}

fn bench_dgemv(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemv");
    for &n in &[32, 128, 512] {
        let a: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.001).sin()).collect();
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.002).cos()).collect();
        let mut y = vec![0.0f64; n];
        for trans in [Transpose::NoTrans, Transpose::Trans] {
            group.bench_with_input(
                BenchmarkId::new(format!("{trans:?}"), n),
                &n,
                |bench, &n| {
                    bench.iter(|| level2::dgemv(trans, n, n, 1.0, &a, n, &x, 1, 0.0, &mut y, 1));
                },
            );
        }
    }
    group.finish();
}

fn bench_dtpsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("dtpsv");
    for &n in &[32, 128, 512] {
        let mut ap = vec![0.0f64; packed_len(n)];
        for j in 0..n {
            for i in j..n {
                ap[packed_index(Uplo::Lower, n, i, j)] = if i == j { 4.0 } else { 0.01 };
            }
        }
        let rhs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let mut x = rhs.clone();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                x.copy_from_slice(&rhs);
                level2::dtpsv(Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, n, &ap, &mut x, 1);
            });
        });
    }
    group.finish();
}

fn bench_dgemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemm");
    for &n in &[16, 32, 64, 128] {
        let a: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.001).sin()).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i as f64 * 0.002).cos()).collect();
        let mut c_mat = vec![0.0f64; n * n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                level3::dgemm(
                    Transpose::NoTrans,
                    Transpose::NoTrans,
                    n,
                    n,
                    n,
                    1.0,
                    &a,
                    n,
                    &b,
                    n,
                    0.0,
                    &mut c_mat,
                    n,
                );
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ddot,
    bench_dnrm2,
    bench_dgemv,
    bench_dtpsv,
    bench_dgemm
);
criterion_main!(benches);
