//! Benchmarks comparing Rational against num-rational's BigRational
//!
//! Run with: cargo bench --bench rational_benchmarks
//!
//! Key Performance Metrics:
//! - Construction (from integers, from f64)
//! - Arithmetic operations (add, mul, div)
//! - Comparison of unreduced operands
//! - Reduction of large common factors
//! - Decimal expansion (evaluate, evaluate_string)
//! - Accumulating workloads (harmonic sums, Taylor series)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exact_ratio::Rational;
use num_bigint::BigInt;
use num_rational::BigRational;

const LN_ONE_MINUS_PHI: f64 = -0.22314355131420976; // ln(1-0.8)

fn ratio(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

fn num(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Benchmark creating rationals from integer pairs
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("Rational::new", |b| {
        b.iter(|| {
            let r = Rational::new(black_box(12345), black_box(67890)).unwrap();
            black_box(r);
        })
    });

    group.bench_function("Rational::new_reduced", |b| {
        b.iter(|| {
            let r = Rational::new_reduced(black_box(12345), black_box(67890)).unwrap();
            black_box(r);
        })
    });

    group.bench_function("num-rational", |b| {
        b.iter(|| {
            let r = BigRational::new(
                black_box(BigInt::from(12345)),
                black_box(BigInt::from(67890)),
            );
            black_box(r);
        })
    });

    group.finish();
}

/// Benchmark exact conversion from floating point
fn bench_from_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_f64");

    let test_cases = vec![("small", 0.5), ("medium", LN_ONE_MINUS_PHI), ("tiny", 0.00001)];

    for (name, value) in test_cases {
        group.bench_with_input(BenchmarkId::new("Rational", name), &value, |b, &val| {
            b.iter(|| {
                let r = Rational::from_f64(black_box(val)).unwrap();
                black_box(r);
            })
        });

        group.bench_with_input(BenchmarkId::new("num-rational", name), &value, |b, &val| {
            b.iter(|| {
                let r = BigRational::from_float(black_box(val)).unwrap();
                black_box(r);
            })
        });
    }

    group.finish();
}

// ============================================================================
// ARITHMETIC
// ============================================================================

/// Benchmark addition with equal and different denominators
fn bench_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    let test_cases = vec![
        ("same_denom", (1, 6), (2, 6)),
        ("diff_denom", (1, 2), (1, 3)),
        ("large", (999999, 1000000), (999998, 1000001)),
    ];

    for (name, (n1, d1), (n2, d2)) in test_cases {
        group.bench_with_input(
            BenchmarkId::new("Rational", name),
            &(ratio(n1, d1), ratio(n2, d2)),
            |b, (r1, r2)| {
                b.iter(|| {
                    let result = r1 + black_box(r2);
                    black_box(result);
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("num-rational", name),
            &(num(n1, d1), num(n2, d2)),
            |b, (r1, r2)| {
                b.iter(|| {
                    let result = r1 + black_box(r2);
                    black_box(result);
                })
            },
        );
    }

    group.finish();
}

/// Benchmark multiplication and division, both of which reduce
fn bench_mul_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_div");

    let test_cases = vec![
        ("small", (2, 3), (3, 4)),
        ("medium", (12345, 67890), (98765, 43210)),
        ("large", (999999, 1000000), (1000000, 999999)),
    ];

    for (name, (n1, d1), (n2, d2)) in test_cases {
        let pair = (ratio(n1, d1), ratio(n2, d2));
        let num_pair = (num(n1, d1), num(n2, d2));

        group.bench_with_input(BenchmarkId::new("Rational_mul", name), &pair, |b, (r1, r2)| {
            b.iter(|| black_box(r1 * black_box(r2)))
        });

        group.bench_with_input(BenchmarkId::new("Rational_div", name), &pair, |b, (r1, r2)| {
            b.iter(|| black_box(r1.checked_div(black_box(r2)).unwrap()))
        });

        group.bench_with_input(
            BenchmarkId::new("num-rational_mul", name),
            &num_pair,
            |b, (r1, r2)| b.iter(|| black_box(r1 * black_box(r2))),
        );

        group.bench_with_input(
            BenchmarkId::new("num-rational_div", name),
            &num_pair,
            |b, (r1, r2)| b.iter(|| black_box(r1 / black_box(r2))),
        );
    }

    group.finish();
}

// ============================================================================
// COMPARISON AND REDUCTION
// ============================================================================

/// Benchmark cross-multiplied comparison, including unreduced operands
fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let a = ratio(123456789, 987654321);
    let b = ratio(-246913578, -1975308642);
    let unreduced_a = ratio(123456789 * 64, 987654321 * 64);

    group.bench_function("Rational_lt", |bench| {
        bench.iter(|| black_box(black_box(&a) < black_box(&b)))
    });
    group.bench_function("Rational_eq_unreduced", |bench| {
        bench.iter(|| black_box(black_box(&unreduced_a) == black_box(&a)))
    });

    let (x, y) = (num(123456789, 987654321), num(-246913578, -1975308642));
    group.bench_function("num-rational_lt", |bench| {
        bench.iter(|| black_box(black_box(&x) < black_box(&y)))
    });

    group.finish();
}

/// Benchmark reducing values that share a large common factor
fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");

    for bits in [64u32, 256, 1024] {
        let factor = BigInt::from(3).pow(bits / 2);
        let numer = &factor * BigInt::from(7);
        let denom = &factor * BigInt::from(11);
        let unreduced = Rational::new(numer.clone(), denom.clone()).unwrap();

        group.bench_with_input(
            BenchmarkId::new("Rational", bits),
            &unreduced,
            |b, r| b.iter(|| black_box(r.clone().reduced())),
        );

        group.bench_with_input(
            BenchmarkId::new("num-rational", bits),
            &(numer, denom),
            |b, (n, d)| b.iter(|| black_box(BigRational::new(n.clone(), d.clone()))),
        );
    }

    group.finish();
}

// ============================================================================
// DECIMAL EXPANSION
// ============================================================================

/// Benchmark conversion to f64 and to decimal text
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let seventh = ratio(1, 7);
    group.bench_function("evaluate", |b| b.iter(|| black_box(black_box(&seventh).evaluate())));
    group.bench_function("evaluate_digits_8", |b| {
        b.iter(|| black_box(black_box(&seventh).evaluate_digits(8)))
    });

    for digits in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("evaluate_string", digits), &digits, |b, &n| {
            b.iter(|| black_box(seventh.evaluate_string(black_box(n))))
        });
    }

    let x = num(1, 7);
    group.bench_function("num-rational_to_f64", |b| {
        use num_traits::ToPrimitive;
        b.iter(|| black_box(black_box(&x).to_f64()))
    });

    group.finish();
}

// ============================================================================
// REAL-WORLD WORKLOADS
// ============================================================================

/// Harmonic partial sums: denominators grow with every step
fn bench_harmonic_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic_sum");

    for terms in [10i64, 50, 100] {
        group.bench_with_input(BenchmarkId::new("Rational", terms), &terms, |b, &n| {
            b.iter(|| {
                let mut sum = Rational::zero();
                for k in 1..=n {
                    sum += ratio(1, k);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("num-rational", terms), &terms, |b, &n| {
            b.iter(|| {
                let mut sum = num(0, 1);
                for k in 1..=n {
                    sum += num(1, k);
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

/// Taylor series of exp(x) at x = ln(1 - 0.8), then evaluated to f64
fn bench_taylor_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("taylor_series");

    group.bench_function("Rational", |b| {
        b.iter(|| {
            let x = Rational::from_f64(black_box(LN_ONE_MINUS_PHI)).unwrap();
            let mut term = Rational::one();
            let mut sum = Rational::one();
            for k in 1..=12u32 {
                term = &term * &x / k;
                sum += &term;
            }
            black_box(sum.evaluate().unwrap())
        })
    });

    group.bench_function("num-rational", |b| {
        use num_traits::{One, ToPrimitive};
        b.iter(|| {
            let x = BigRational::from_float(black_box(LN_ONE_MINUS_PHI)).unwrap();
            let mut term = BigRational::one();
            let mut sum = BigRational::one();
            for k in 1..=12u32 {
                term = &term * &x / BigRational::from_integer(BigInt::from(k));
                sum += &term;
            }
            black_box(sum.to_f64())
        })
    });

    group.finish();
}

criterion_group!(
    basic_ops,
    bench_construction,
    bench_from_f64,
    bench_addition,
    bench_mul_div,
    bench_comparison,
    bench_reduction,
    bench_evaluate
);

criterion_group!(real_world, bench_harmonic_sum, bench_taylor_series);

criterion_main!(basic_ops, real_world);
