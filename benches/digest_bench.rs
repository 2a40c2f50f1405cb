//! Benchmarks for digestrs.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use digestrs::{Algorithm, Digest};

fn bench_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("oneshot");

    let size = 1024 * 1024; // 1 MB
    // Deterministic pseudo-random data
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    for algorithm in [
        Algorithm::Adler32,
        Algorithm::Bsd,
        Algorithm::Cksum,
        Algorithm::Crc32,
        Algorithm::Sysv,
        Algorithm::Twoping,
        Algorithm::Udp,
    ] {
        group.bench_with_input(algorithm.name(), &data, |b, data| {
            b.iter(|| black_box(Digest::oneshot(algorithm, black_box(data))));
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");

    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    // Fed in 4 KiB pieces, the shape a reader loop produces.
    for algorithm in [Algorithm::Adler32, Algorithm::Crc32, Algorithm::Udp] {
        group.bench_with_input(algorithm.name(), &data, |b, data| {
            b.iter(|| {
                let mut digest = Digest::new(algorithm);
                for piece in data.chunks(4096) {
                    digest.update(black_box(piece));
                }
                black_box(digest.digest())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_oneshot, bench_streaming);
criterion_main!(benches);
