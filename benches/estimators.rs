//! Direct vs spectral accumulation cost across profile lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqcorr::{CorrelationMode, DirectAutocovariance, ProfileAccumulator, SpectralAutocovariance};

fn synthetic_profile(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| if (i * 7 + 3) % 5 < 2 { 1.0 } else { 0.0 })
        .collect()
}

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_profile");

    for len in [256usize, 1024, 4096] {
        let profile = synthetic_profile(len);
        let num_lags = len / 4;

        group.bench_with_input(BenchmarkId::new("direct", len), &profile, |b, profile| {
            b.iter(|| {
                let mut ct = DirectAutocovariance::new(num_lags, false);
                ct.record(black_box(profile));
                black_box(ct.result(0))
            });
        });

        // Spectral pays the planner once per length, then reuses plans.
        group.bench_with_input(BenchmarkId::new("spectral", len), &profile, |b, profile| {
            let mut ct = SpectralAutocovariance::new(num_lags, CorrelationMode::Circular);
            b.iter(|| {
                ct.record(black_box(profile));
                black_box(ct.result(0))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_record);
criterion_main!(benches);
