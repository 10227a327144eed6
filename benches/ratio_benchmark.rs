// ============================================================================
// Ratio Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - Normalization cost for reducible and coprime inputs
// 2. Arithmetic - Ratio/Ratio against Ratio/integer operands
// 3. Comparison - Cross-multiplied ordering and sorting
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratio::numeric::Ratio;

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for (name, p, q) in [
        ("coprime", 1_000_003i64, 999_983i64),
        ("reducible", 6_227_020_800, 39_916_800),
        ("large", i64::MAX - 1, i64::MAX),
    ] {
        group.bench_with_input(BenchmarkId::new("new", name), &(p, q), |b, &(p, q)| {
            b.iter(|| black_box(Ratio::new(black_box(p), black_box(q))));
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// Mixed-type operands skip one multiplication per term
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let x = Ratio::new(355, 113).unwrap();
    let y = Ratio::new(-22, 7).unwrap();

    group.bench_function("add_ratio", |b| {
        b.iter(|| black_box(black_box(x).checked_add(black_box(y))));
    });
    group.bench_function("add_int", |b| {
        b.iter(|| black_box(black_box(x).checked_add(black_box(3i64))));
    });
    group.bench_function("mul_ratio", |b| {
        b.iter(|| black_box(black_box(x).checked_mul(black_box(y))));
    });
    group.bench_function("div_ratio", |b| {
        b.iter(|| black_box(black_box(x).checked_div(black_box(y))));
    });
    group.bench_function("pow", |b| {
        b.iter(|| black_box(black_box(x).checked_pow(black_box(5i32))));
    });

    // Harmonic sum 1 + 1/2 + ... + 1/n stays within i64 for small n
    for n in [10i64, 20, 30].iter() {
        group.bench_with_input(BenchmarkId::new("harmonic_sum", n), n, |b, &n| {
            b.iter(|| {
                (1..=n).try_fold(Ratio::ZERO, |acc, k| acc.checked_add(Ratio::new(1, k)?))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Comparison Benchmarks
// ============================================================================

fn benchmark_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let x = Ratio::new(i64::MAX - 1, i64::MAX).unwrap();
    let y = Ratio::new(i64::MAX, i64::MAX - 1).unwrap();

    group.bench_function("cmp_extreme", |b| {
        b.iter(|| black_box(black_box(x) < black_box(y)));
    });

    for size in [100usize, 1000].iter() {
        let values: Vec<Ratio> = (1..=*size as i64)
            .map(|k| Ratio::new((k * 7919) % 1009 - 504, k).unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::new("sort", size), &values, |b, values| {
            b.iter(|| {
                let mut v = values.clone();
                v.sort();
                black_box(v)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_arithmetic,
    benchmark_comparison,
);

criterion_main!(benches);
