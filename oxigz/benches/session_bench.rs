//! Throughput benchmarks for gzip sessions.
//!
//! Covers:
//! - One-shot compression and decompression across data sizes
//! - The effect of the staging buffer size on the drain loop
//! - Streaming input in fixed-size pieces vs a single call

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxigz::{Mode, SessionConfig, compress, compress_with, decompress, processor};
use std::hint::black_box;

mod test_data {
    /// Random data - varied byte values
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            data.extend_from_slice(&text[..remaining.min(text.len())]);
        }
        data
    }
}

const SIZES: [(&str, usize); 3] = [("4KB", 4 * 1024), ("64KB", 64 * 1024), ("1MB", 1024 * 1024)];

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for (size_name, size) in SIZES {
        let data = test_data::text_like(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data)).unwrap()));
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for (size_name, size) in SIZES {
        let data = test_data::random(size);
        let compressed = compress(&data).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &compressed, |b, gz| {
            b.iter(|| black_box(decompress(black_box(gz)).unwrap()));
        });
    }

    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_size");
    let data = test_data::random(1024 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk_size in [512, 4 * 1024, 16 * 1024, 64 * 1024] {
        let config = SessionConfig::DEFAULT.with_chunk_size(chunk_size);
        group.bench_with_input(BenchmarkId::from_parameter(chunk_size), &data, |b, data| {
            b.iter(|| black_box(compress_with(black_box(data), &config).unwrap()));
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming_compress");
    let data = test_data::text_like(1024 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for piece in [1024, 16 * 1024, 256 * 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(piece), &data, |b, data| {
            b.iter(|| {
                let mut session = processor(Mode::Compress);
                session.initialize().unwrap();
                let mut out = Vec::new();
                for chunk in data.chunks(piece) {
                    out.extend(session.process(chunk, false).unwrap());
                }
                out.extend(session.process(&[], true).unwrap());
                black_box(out)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compress,
    bench_decompress,
    bench_chunk_sizes,
    bench_streaming
);
criterion_main!(benches);
