// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dp_polynomial::{Polynomial, Tokens};

fn create_test_polynomials(degree: usize) -> (Polynomial, Polynomial) {
    let coeffs1: Vec<f64> = (0..=degree).map(|i| i as f64 + 1.0).collect();
    let coeffs2: Vec<f64> = (0..=degree).map(|i| (i + 1) as f64 * 2.0).collect();

    (
        Polynomial::new(degree, &coeffs1).unwrap(),
        Polynomial::new(degree, &coeffs2).unwrap(),
    )
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.add(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.mul(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_division");

    for degree in [10, 20, 50, 100] {
        let (poly1, _) = create_test_polynomials(degree);
        let (divisor, _) = create_test_polynomials(degree / 2);

        group.bench_function(&format!("long_degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.div_rem(&divisor).unwrap()))
        });

        group.bench_function(&format!("coefficientwise_degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.div_coefficientwise(&divisor)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");

    for degree in [10, 50, 100, 500] {
        let (poly1, _) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.evaluate(black_box(0.99))))
        });

        group.bench_function(&format!("integrate_degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.integrate(-1.0, 1.0)))
        });
    }

    group.finish();
}

fn benchmark_text_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_codec");

    for degree in [10, 100, 1000] {
        let (poly, _) = create_test_polynomials(degree);
        let text = poly.to_text();

        group.bench_function(&format!("write_degree_{}", degree), |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(text.len());
                poly.write(&mut out).unwrap();
                black_box(out)
            })
        });

        group.bench_function(&format!("read_degree_{}", degree), |b| {
            b.iter(|| black_box(Polynomial::read_from(&mut Tokens::from_text(&text)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_multiplication,
    benchmark_polynomial_division,
    benchmark_polynomial_evaluation,
    benchmark_text_codec
);
criterion_main!(benches);
