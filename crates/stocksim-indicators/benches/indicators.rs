//! Benchmarks for indicator implementations.

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stocksim_core::types::Bar;
use stocksim_indicators::{macd, rsi, sma};

fn generate_test_bars(size: usize) -> Vec<Bar> {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    (0..size)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar::new(
                start + Days::new(i as u64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000,
            )
        })
        .collect()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for size in [90, 1000, 10000].iter() {
        let bars = generate_test_bars(*size);

        group.bench_with_input(BenchmarkId::new("sma20", size), &bars, |b, bars| {
            b.iter(|| sma(black_box(bars), black_box(20)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [90, 1000, 10000].iter() {
        let bars = generate_test_bars(*size);

        group.bench_with_input(BenchmarkId::new("rsi14", size), &bars, |b, bars| {
            b.iter(|| rsi(black_box(bars), black_box(14)))
        });
    }

    group.finish();
}

fn benchmark_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("MACD");

    for size in [90, 1000, 10000].iter() {
        let bars = generate_test_bars(*size);

        group.bench_with_input(BenchmarkId::new("12_26_9", size), &bars, |b, bars| {
            b.iter(|| macd(black_box(bars), 12, 26, 9))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sma, benchmark_rsi, benchmark_macd);
criterion_main!(benches);
