//! Criterion benchmarks for the estimation hot path
//!
//! Covers: outlier trimming (both policies), peak location, and the full
//! batch analysis pipeline at realistic sample counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tablet_area::analysis::outlier::OutlierPolicy;
use tablet_area::analysis::peaks::locate_peaks;
use tablet_area::analysis::{analyze_batch, AnalysisOptions};
use tablet_area::capture::types::{CursorSample, SampleBatch};
use tablet_area::DeviceGeometry;

/// Synthetic session: mostly clustered, occasional excursions.
fn make_series(n: usize) -> Vec<u32> {
    (0..n)
        .map(|i| {
            if i % 97 == 0 {
                (i * 31 % 1900) as u32
            } else {
                (500 + i * 13 % 600) as u32
            }
        })
        .collect()
}

fn make_batch(n: usize) -> SampleBatch {
    let series = make_series(n);
    SampleBatch::new(
        series
            .iter()
            .enumerate()
            .map(|(i, &v)| CursorSample::new(v, v / 2 + 100, i as u64 * 10))
            .collect(),
    )
}

fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim");
    for n in [1_000, 10_000, 60_000] {
        let series = make_series(n);
        group.bench_with_input(BenchmarkId::new("percentile", n), &series, |b, s| {
            let policy = OutlierPolicy::default();
            b.iter(|| policy.trim(black_box(s)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("std_dev", n), &series, |b, s| {
            let policy = OutlierPolicy::StdDev;
            b.iter(|| policy.trim(black_box(s)).unwrap());
        });
    }
    group.finish();
}

fn bench_peaks(c: &mut Criterion) {
    let series = make_series(10_000);
    let extent = OutlierPolicy::default().trim(&series).unwrap();

    c.bench_function("locate_peaks_10k", |b| {
        b.iter(|| locate_peaks(black_box(&series), extent, 5));
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let geometry = DeviceGeometry::new(152.0, 95.0, 1920, 1080).unwrap();
    let options = AnalysisOptions::default();

    let mut group = c.benchmark_group("analyze_batch");
    for n in [6_000, 60_000] {
        let batch = make_batch(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |b, batch| {
            b.iter(|| analyze_batch(black_box(batch), &geometry, &options).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_trim, bench_peaks, bench_full_pipeline);
criterion_main!(benches);
