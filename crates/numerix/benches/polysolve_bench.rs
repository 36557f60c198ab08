//! Benchmarks for the root-solving pipeline.

use std::f64::consts::TAU;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use numerix::prelude::*;

/// Real roots spread evenly over [-2, 2].
fn real_poly(degree: usize) -> Polynomial<f64> {
    let roots: Vec<f64> = (0..degree)
        .map(|i| -2.0 + 4.0 * i as f64 / (degree - 1) as f64)
        .collect();
    Polynomial::from_roots(&roots)
}

/// Roots on a circle of radius 1.5, slightly rotated off the real axis.
fn complex_poly(degree: usize) -> Polynomial<Complex64> {
    let roots: Vec<Complex64> = (0..degree)
        .map(|i| Complex64::from_polar(1.5, 0.1 + TAU * i as f64 / degree as f64))
        .collect();
    Polynomial::from_roots(&roots)
}

fn bench_polysolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("polysolve");
    let config = SolverConfig::new().with_tolerance(1e-6);

    for degree in [4, 6, 8, 12, 16] {
        let real = real_poly(degree);
        let complex = complex_poly(degree);

        group.bench_with_input(BenchmarkId::new("real", degree), &degree, |b, _| {
            b.iter(|| black_box(polysolve(&real, &config, RootType::Real)));
        });

        group.bench_with_input(BenchmarkId::new("complex", degree), &degree, |b, _| {
            b.iter(|| black_box(polysolve(&complex, &config, RootType::Complex)));
        });
    }

    group.finish();
}

fn bench_closed_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_form");
    let quadratic = Polynomial::new(vec![-5.0, 0.0, 1.0]);
    let cubic = Polynomial::new(vec![-6.0, 11.0, -6.0, 1.0]);

    group.bench_function("quadratic", |b| {
        b.iter(|| black_box(numerix::roots::quadratic(&quadratic, 1e-9, RootType::Complex)));
    });
    group.bench_function("cubic", |b| {
        b.iter(|| black_box(numerix::roots::cubic(&cubic, 1e-9, RootType::Complex)));
    });

    group.finish();
}

criterion_group!(benches, bench_polysolve, bench_closed_forms);
criterion_main!(benches);
