// ============================================================================
// BigNum Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Addition - aligned, wide-gap and per-tick in-place accumulation
// 2. Division - ratio formulas at several magnitudes
// 3. Encoding - storage round trip and scientific rendering
// 4. Log Domain - log10 extraction and reconstruction
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use progress_bignum::prelude::*;
use std::hint::black_box;

fn sci(text: &str) -> BigNum {
    BigNum::from_scientific(text).unwrap()
}

// ============================================================================
// Addition Benchmarks
// ============================================================================

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for (label, a, b) in [
        ("same_exponent", sci("1.5e20"), sci("2.5e20")),
        ("aligned_gap", sci("1.5e30"), sci("2.5e20")),
        ("negligible", sci("1.5e300"), sci("2.5e20")),
        ("past_double_range", sci("1.5e5000"), sci("2.5e4995")),
    ] {
        group.bench_with_input(BenchmarkId::new("add", label), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a.add(b)));
        });
    }

    group.finish();
}

fn benchmark_tick_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_accumulation");

    for precision in [12u32, 18, 36] {
        let config = BigNumConfig::new().with_precision(precision);
        let income = config.parse("1.234e9").unwrap();
        group.bench_with_input(
            BenchmarkId::new("add_in_place_1000_ticks", precision),
            &income,
            |bench, income| {
                bench.iter(|| {
                    let mut total = config.zero().unwrap();
                    for _ in 0..1000 {
                        total.add_in_place(income);
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Division Benchmarks
// ============================================================================

fn benchmark_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");

    for (label, a, b) in [
        ("small", BigNum::from_u64(1_000_000), BigNum::from_u64(7)),
        ("large", sci("7.77e450"), sci("3.3e120")),
    ] {
        group.bench_with_input(BenchmarkId::new("div", label), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a.div(b)));
        });
    }

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn benchmark_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    let value = sci("1.23456789e400");

    group.bench_function("storage_round_trip", |bench| {
        bench.iter(|| black_box(BigNum::from_storage(&value.to_storage()).unwrap()));
    });

    group.bench_function("to_scientific", |bench| {
        bench.iter(|| black_box(value.to_scientific(3)));
    });

    group.finish();
}

// ============================================================================
// Log-Domain Benchmarks
// ============================================================================

fn benchmark_log_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_domain");
    let value = sci("4.56e1234");

    group.bench_function("approx_log10", |bench| {
        bench.iter(|| black_box(value.approx_log10()));
    });

    group.bench_function("from_log10", |bench| {
        bench.iter(|| black_box(BigNum::from_log10(black_box(1234.567)).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_tick_accumulation,
    benchmark_div,
    benchmark_encoding,
    benchmark_log_domain,
);
criterion_main!(benches);
