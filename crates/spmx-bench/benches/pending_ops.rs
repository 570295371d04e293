//! Criterion micro-benchmarks for pending-list growth and appends.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use spmx_bench::{fill_pending, scattered_coords};
use spmx_core::{ScalarType, TypeCode};
use spmx_pending::{PendingConfig, PendingHandle, PendingLayout};

fn fp64_matrix() -> PendingLayout {
    PendingLayout::matrix(ScalarType::Builtin(TypeCode::Fp64))
}

/// Benchmark: 10K appends starting from a one-slot list.
fn bench_append_10k_from_one(c: &mut Criterion) {
    let coords = scattered_coords(10_000, 1000, 1000, 7);
    let value = 1.0f64.to_ne_bytes();
    c.bench_function("pending_append_10k_from_one", |b| {
        b.iter(|| {
            let mut h = PendingHandle::new().with_config(PendingConfig {
                initial_capacity: 1,
            });
            fill_pending(&mut h, fp64_matrix(), &coords, &value).unwrap();
            black_box(h.len());
        });
    });
}

/// Benchmark: 10K appends into a list presized for all of them.
fn bench_append_10k_presized(c: &mut Criterion) {
    let coords = scattered_coords(10_000, 1000, 1000, 7);
    let value = 1.0f64.to_ne_bytes();
    c.bench_function("pending_append_10k_presized", |b| {
        b.iter(|| {
            let mut h = PendingHandle::new();
            h.alloc(fp64_matrix(), coords.len()).unwrap();
            fill_pending(&mut h, fp64_matrix(), &coords, &value).unwrap();
            black_box(h.len());
        });
    });
}

/// Benchmark: realloc requests that fit (no-op path).
fn bench_realloc_fast_path(c: &mut Criterion) {
    let mut h = PendingHandle::new();
    h.alloc(fp64_matrix(), 1024).unwrap();
    c.bench_function("pending_realloc_fits", |b| {
        b.iter(|| {
            h.realloc(black_box(512)).unwrap();
        });
    });
}

/// Benchmark: reserve a 10K tail once, fill it, then commit.
fn bench_bulk_commit_10k(c: &mut Criterion) {
    let coords = scattered_coords(10_000, 1000, 1000, 9);
    c.bench_function("pending_bulk_commit_10k", |b| {
        b.iter(|| {
            let mut h = PendingHandle::new();
            h.alloc(fp64_matrix(), 0).unwrap();
            h.realloc(coords.len()).unwrap();
            let list = h.get_mut().unwrap();
            let tail = list.spare_mut();
            let cols = tail.cols.unwrap();
            for (k, &(row, col)) in coords.iter().enumerate() {
                tail.rows[k] = row;
                cols[k] = col;
                tail.values[k * 8..(k + 1) * 8].copy_from_slice(&(k as f64).to_ne_bytes());
            }
            list.commit(coords.len()).unwrap();
            black_box(list.is_sorted());
        });
    });
}

criterion_group!(
    benches,
    bench_append_10k_from_one,
    bench_append_10k_presized,
    bench_realloc_fast_path,
    bench_bulk_commit_10k
);
criterion_main!(benches);
