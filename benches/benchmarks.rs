//! Benchmarks for flowhmean
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use flowhmean::window::{harmonic_mean, HarmonicMeanExt, WindowSize, WindowedHarmonicMean};

/// Deterministic stream; every `zero_every`-th value is zero (0 disables zeros)
fn stream(len: usize, zero_every: usize) -> Vec<f64> {
    let mut state = 0x853c49e6748fea9bu64;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            if zero_every != 0 && i % zero_every == 0 {
                0.0
            } else {
                1.0 + (state % 1000) as f64 / 10.0
            }
        })
        .collect()
}

// ============================================================================
// Incremental processing
// ============================================================================

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    group.throughput(Throughput::Elements(1));

    for window in [5, 64, 1024] {
        group.bench_function(format!("no_zeros_w{}", window), |b| {
            let data = stream(4096, 0);
            let mut hm = WindowedHarmonicMean::with_window(window).unwrap();
            let mut i = 0usize;
            b.iter(|| {
                black_box(hm.process(data[i & 4095]));
                i = i.wrapping_add(1);
            });
        });

        group.bench_function(format!("sparse_zeros_w{}", window), |b| {
            let data = stream(4096, 97);
            let mut hm = WindowedHarmonicMean::with_window(window).unwrap();
            let mut i = 0usize;
            b.iter(|| {
                black_box(hm.process(data[i & 4095]));
                i = i.wrapping_add(1);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Incremental vs from-scratch
// ============================================================================

fn bench_vs_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_10k");
    let data = stream(10_000, 50);
    group.throughput(Throughput::Elements(data.len() as u64));

    for window in [8usize, 128] {
        group.bench_with_input(BenchmarkId::new("incremental", window), &window, |b, &w| {
            b.iter(|| {
                let size = WindowSize::try_from(w).unwrap();
                let sum: f64 = data.iter().copied().moving_harmonic_mean(size).sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("naive", window), &window, |b, &w| {
            b.iter(|| {
                let sum: f64 = data.windows(w).filter_map(harmonic_mean).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process, bench_vs_naive);
criterion_main!(benches);
