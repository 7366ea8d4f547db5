// ============================================================================
// Currency Fractions Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Literal Parsing - Normalizing strings into fractions
// 2. Fraction Arithmetic - Rescaling add, multiply and divide
// 3. Formatting - Fixed-place and significant-digit rendering
// 4. Domain Operations - Amount construction and price quoting
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use currency_fractions::prelude::*;
use std::hint::black_box;

fn token(byte: u8, decimals: u8) -> Currency {
    Currency::from(Token::new(1, TokenAddress::from_bytes([byte; 20]), decimals))
}

// ============================================================================
// Literal Parsing
// ============================================================================

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_literal");

    for literal in ["42", "1234.5678", "0.000000000000000001", "123456789012345678901234567890.5"] {
        group.bench_with_input(BenchmarkId::from_parameter(literal), &literal, |b, lit| {
            b.iter(|| black_box(lit.parse::<Fraction>()))
        });
    }

    group.finish();
}

// ============================================================================
// Fraction Arithmetic
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("fraction_arithmetic");

    let a: Fraction = "12345.678901234567890123".parse().unwrap();
    let b: Fraction = "0.5".parse().unwrap();

    group.bench_function("add_mixed_scale", |bench| {
        bench.iter(|| black_box(black_box(&a).add(black_box(&b))))
    });

    group.bench_function("multiply_mixed_scale", |bench| {
        bench.iter(|| black_box(black_box(&a).multiply(black_box(&b))))
    });

    group.bench_function("divide_18", |bench| {
        bench.iter(|| black_box(black_box(&a).checked_div_with_decimals(black_box(&b), 18)))
    });

    group.bench_function("compare_mixed_scale", |bench| {
        bench.iter(|| black_box(black_box(&a).cmp(black_box(&b))))
    });

    group.finish();
}

// ============================================================================
// Formatting
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let value: Fraction = "1234567.891011121314151617".parse().unwrap();
    let plain = FormatOptions::new(Rounding::HalfUp);
    let grouped = plain.with_group_separator(',');

    group.bench_function("to_fixed_2", |b| {
        b.iter(|| black_box(value.to_fixed(2, &plain)))
    });

    group.bench_function("to_fixed_2_grouped", |b| {
        b.iter(|| black_box(value.to_fixed(2, &grouped)))
    });

    for digits in [1u32, 6, 18].iter() {
        group.bench_with_input(BenchmarkId::new("to_significant", digits), digits, |b, &d| {
            b.iter(|| black_box(value.to_significant(d, Rounding::Down)))
        });
    }

    group.finish();
}

// ============================================================================
// Domain Operations
// ============================================================================

fn benchmark_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain");

    let weth = token(1, 18);
    let usdc = token(2, 6);
    let price = Price::from_ratio(weth.clone(), usdc, 1, "2437.81").unwrap();
    let balance = Amount::from_raw(weth.clone(), "3.14159265358979").unwrap();

    group.bench_function("amount_from_raw", |b| {
        b.iter(|| black_box(Amount::from_raw(weth.clone(), black_box("1.5"))))
    });

    group.bench_function("amount_add", |b| {
        b.iter(|| black_box(balance.add(&balance)))
    });

    group.bench_function("price_quote", |b| {
        b.iter(|| black_box(price.quote(&balance)))
    });

    group.bench_function("price_invert", |b| b.iter(|| black_box(price.invert())));

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_arithmetic,
    benchmark_formatting,
    benchmark_domain,
);

criterion_main!(benches);
