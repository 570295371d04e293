//! Criterion micro-benchmarks for cast dispatch.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use spmx_bench::packed_values;
use spmx_cast::{cast_factory, cast_slice};
use spmx_core::{ScalarType, TypeCode};

/// Benchmark: resolve every ordered pair of type codes.
fn bench_factory_all_pairs(c: &mut Criterion) {
    c.bench_function("cast_factory_all_pairs", |b| {
        b.iter(|| {
            for dst in TypeCode::ALL {
                for src in TypeCode::ALL {
                    black_box(cast_factory(black_box(dst), black_box(src)));
                }
            }
        });
    });
}

/// Benchmark: cast 10K f64 values to i32.
fn bench_slice_fp64_to_int32(c: &mut Criterion) {
    let src = packed_values(10_000, |k| k as f64 * 0.5);
    let mut dst = vec![0u8; 10_000 * 4];
    c.bench_function("cast_slice_fp64_to_int32_10k", |b| {
        b.iter(|| {
            cast_slice(
                &mut dst,
                ScalarType::Builtin(TypeCode::Int32),
                &src,
                ScalarType::Builtin(TypeCode::Fp64),
                10_000,
            )
            .unwrap();
            black_box(dst[0]);
        });
    });
}

/// Benchmark: cast 10K i64 values to bool.
fn bench_slice_int64_to_bool(c: &mut Criterion) {
    let src = packed_values(10_000, |k| (k % 3) as i64);
    let mut dst = vec![0u8; 10_000];
    c.bench_function("cast_slice_int64_to_bool_10k", |b| {
        b.iter(|| {
            cast_slice(
                &mut dst,
                ScalarType::Builtin(TypeCode::Bool),
                &src,
                ScalarType::Builtin(TypeCode::Int64),
                10_000,
            )
            .unwrap();
            black_box(dst[0]);
        });
    });
}

/// Benchmark: copy 10K 24-byte user-defined values.
fn bench_slice_opaque_copy(c: &mut Criterion) {
    let t = ScalarType::opaque(24).unwrap();
    let src = vec![0x5au8; 10_000 * 24];
    let mut dst = vec![0u8; 10_000 * 24];
    c.bench_function("cast_slice_opaque_24b_10k", |b| {
        b.iter(|| {
            cast_slice(&mut dst, t, &src, t, 10_000).unwrap();
            black_box(dst[0]);
        });
    });
}

criterion_group!(
    benches,
    bench_factory_all_pairs,
    bench_slice_fp64_to_int32,
    bench_slice_int64_to_bool,
    bench_slice_opaque_copy
);
criterion_main!(benches);
