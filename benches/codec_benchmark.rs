// ============================================================================
// Codec Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Integer Encode - BigInt greedy threshold conversion at growing widths
// 2. Fixed Encode/Decode - floating-point fixed-point round trips
// 3. Substring Finder - the O(n^2) repeated-pattern search
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csdigit::prelude::*;
use num_bigint::BigInt;
use num_traits::One;

fn benchmark_encode_integer(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_integer");

    for bits in [32u64, 128, 512, 2048].iter() {
        let value: BigInt = (BigInt::one() << *bits) - 12345;
        group.bench_with_input(BenchmarkId::new("bits", bits), &value, |b, value| {
            b.iter(|| black_box(encode_integer(value)))
        });
    }
    group.finish();
}

fn benchmark_fixed_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_codec");

    group.bench_function("encode_fixed_28.5_p16", |b| {
        b.iter(|| black_box(encode_fixed(black_box(28.5), 16)))
    });

    let csd = encode_fixed(28.5, 16);
    group.bench_function("decode", |b| b.iter(|| black_box(decode(&csd).unwrap())));
    group.bench_function("decode_positional", |b| {
        b.iter(|| black_box(decode_positional(&csd).unwrap()))
    });
    group.finish();
}

fn benchmark_substring_finder(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_repeated_substring");

    // Quadratic table, so size growth dominates the runtime
    for repeats in [4usize, 16, 64].iter() {
        let input = "+-00".repeat(*repeats);
        group.bench_with_input(
            BenchmarkId::new("len", input.len()),
            &input,
            |b, input| b.iter(|| black_box(longest_repeated_substring(input))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_integer,
    benchmark_fixed_round_trip,
    benchmark_substring_finder
);
criterion_main!(benches);
