//! Benchmark Command
//!
//! Quick wall-clock throughput numbers per block size. For statistically
//! rigorous measurements use the criterion suite in the `benches` crate.

use std::time::Instant;

use super::Algorithm;

const SIZES: [(&str, usize, u32); 5] = [
    ("Small (64 B)", 64, 100_000),
    ("Medium (1 KB)", 1024, 50_000),
    ("Large (10 KB)", 10 * 1024, 5_000),
    ("XL (100 KB)", 100 * 1024, 500),
    ("XXL (1 MB)", 1024 * 1024, 50),
];

fn run(name: &str, data_size: usize, iterations: u32, hash: fn(&[u8]) -> [u8; 32]) {
    let data = vec![b'x'; data_size];

    // Warmup
    for _ in 0..10 {
        std::hint::black_box(hash(&data));
    }

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(hash(&data));
    }
    let elapsed = start.elapsed().as_secs_f64();

    let throughput = (data_size as u64 * u64::from(iterations)) as f64 / elapsed / (1024.0 * 1024.0);
    println!(
        "  {name:<20} {data_size:>8} bytes x {iterations:>6} = {throughput:>8.2} MB/s  ({:.4} ms/hash)",
        elapsed / f64::from(iterations) * 1000.0
    );
}

/// Print throughput per block size for the selected variant.
pub fn benchmark(algo: Algorithm) {
    let (name, hash): (&str, fn(&[u8]) -> [u8; 32]) = match algo {
        Algorithm::V2 => ("HARMONIA v2.2", harmonia::v2::hash),
        Algorithm::Fast => ("HARMONIA-Fast", harmonia::fast::hash),
        Algorithm::Ng => ("HARMONIA-NG", harmonia::ng::hash),
    };

    println!();
    println!("============================================================");
    println!("{name} Performance Benchmark");
    println!("============================================================");
    println!();

    for (label, size, iterations) in SIZES {
        run(label, size, iterations, hash);
    }

    if algo == Algorithm::Ng {
        println!();
        println!("4-way batch ({} backend):", harmonia::ng::active_backend());
        bench_batch4();
    }

    println!();
    println!("============================================================");
}

fn bench_batch4() {
    let data = vec![b'x'; 10 * 1024];
    let msgs = [data.as_slice(), &data, &data, &data];
    let iterations = 1_250u32;

    for _ in 0..10 {
        std::hint::black_box(harmonia::ng::hash_batch4(std::hint::black_box(msgs)).ok());
    }

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(harmonia::ng::hash_batch4(std::hint::black_box(msgs)).ok());
    }
    let elapsed = start.elapsed().as_secs_f64();

    let bytes = data.len() as u64 * 4 * u64::from(iterations);
    let throughput = bytes as f64 / elapsed / (1024.0 * 1024.0);
    println!("  10 KB x 4 lanes x {iterations} = {throughput:.2} MB/s");
}
