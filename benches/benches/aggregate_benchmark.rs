//! Aggregation and ATR benchmarks.
//!
//! Run with: `cargo bench --package barfold-bench`

use barfold_aggregate::{convert_timeframe, resample};
use barfold_bench::{synthetic_candles, synthetic_series};
use barfold_indicators::atr;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_500, 100_000, 1_000_000];

fn convert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_timeframe");

    for n in SIZES {
        let candles = synthetic_candles(n);
        let opens: Vec<f64> = candles.iter().map(|c| c.open).collect();
        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        group.throughput(Throughput::Elements(n as u64));
        for timeframe in [5, 60] {
            group.bench_with_input(
                BenchmarkId::new(format!("tf{timeframe}"), n),
                &timeframe,
                |b, &tf| {
                    b.iter(|| {
                        convert_timeframe(
                            black_box(&opens),
                            black_box(&highs),
                            black_box(&lows),
                            black_box(&closes),
                            tf,
                            0,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn resample_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for n in SIZES {
        let series = synthetic_series(n).expect("synthetic series is ordered");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, series| {
            b.iter(|| resample(black_box(series), 5, 0));
        });
    }

    group.finish();
}

fn atr_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("atr");

    for n in SIZES {
        let candles = synthetic_candles(n);
        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| atr(black_box(&highs), black_box(&lows), black_box(&closes), 14));
        });
    }

    group.finish();
}

criterion_group!(benches, convert_benchmark, resample_benchmark, atr_benchmark);
criterion_main!(benches);
