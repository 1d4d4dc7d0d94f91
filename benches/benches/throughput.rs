//! Harmonia Criterion Benchmark
//!
//! Statistically rigorous throughput and latency measurements across
//! variants, input sizes, and the NG 4-way batch interface.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot-path latency for small inputs, per variant.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let variants: [(&str, fn(&[u8]) -> [u8; 32]); 3] = [
        ("v2", harmonia::v2::hash),
        ("fast", harmonia::fast::hash),
        ("ng", harmonia::ng::hash),
    ];

    for (name, hash) in variants {
        let input = random_input(64);
        group.throughput(Throughput::Bytes(64));
        group.bench_with_input(BenchmarkId::new(name, "64B"), &input, |b, data| {
            b.iter(|| hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Sustained throughput across block counts.
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Throughput");

    let sizes = [
        (KB, "1KB"),
        (16 * KB, "16KB"),
        (256 * KB, "256KB"),
        (MB, "1MB"),
    ];

    let variants: [(&str, fn(&[u8]) -> [u8; 32]); 3] = [
        ("v2", harmonia::v2::hash),
        ("fast", harmonia::fast::hash),
        ("ng", harmonia::ng::hash),
    ];

    for (size, size_name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        for (name, hash) in variants {
            group.bench_with_input(BenchmarkId::new(name, size_name), &input, |b, data| {
                b.iter(|| hash(black_box(data)))
            });
        }
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Incremental updates versus one-shot hashing.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(50);

    let input = random_input(MB);
    group.throughput(Throughput::Bytes(MB as u64));

    for chunk_size in [4 * KB, 64 * KB] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("1MB-{}KB-chunks", chunk_size / KB)),
            &input,
            |b, data| {
                b.iter(|| {
                    let mut hasher = harmonia::ng::Hasher::new();
                    for chunk in data.chunks(chunk_size) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: 4-WAY BATCH
// =============================================================================

/// NG batch interface against four scalar calls, per backend in use.
fn bench_batch4(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Batch");

    let lanes: Vec<Vec<u8>> = (0..4).map(|_| random_input(64 * KB)).collect();
    let msgs = [
        lanes[0].as_slice(),
        lanes[1].as_slice(),
        lanes[2].as_slice(),
        lanes[3].as_slice(),
    ];
    group.throughput(Throughput::Bytes(4 * 64 * KB as u64));

    group.bench_function(
        BenchmarkId::from_parameter(format!("batch4-{}", harmonia::ng::active_backend())),
        |b| b.iter(|| harmonia::ng::hash_batch4(black_box(msgs)).unwrap()),
    );

    group.bench_function("scalar-x4", |b| {
        b.iter(|| {
            [
                harmonia::ng::hash(black_box(msgs[0])),
                harmonia::ng::hash(black_box(msgs[1])),
                harmonia::ng::hash(black_box(msgs[2])),
                harmonia::ng::hash(black_box(msgs[3])),
            ]
        })
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_throughput,
    bench_streaming,
    bench_batch4,
);

criterion_main!(benches);
