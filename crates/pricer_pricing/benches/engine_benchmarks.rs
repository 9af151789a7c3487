//! Criterion benchmarks for the closed-form engines.
//!
//! Benchmarks cover:
//! - Single vanilla and barrier NPVs through the pricer facade
//! - Batch pricing, parallel against sequential, at several batch sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::Date;
use pricer_models::instruments::{OptionRecord, OptionSpec};
use pricer_pricing::{price, price_batch, price_batch_sequential};

fn valuation() -> Date {
    Date::from_ymd(2024, 1, 2).unwrap()
}

/// Build a spec; every fifth one is an up-and-out barrier.
fn make_spec(i: usize) -> OptionSpec {
    let barrier = i % 5 == 0;
    let record = OptionRecord {
        option_name: Some(format!("OPT{:05}", i)),
        spot: Some(100.0),
        strike: Some(80.0 + (i % 40) as f64),
        volatility: Some(0.15 + (i % 7) as f64 * 0.05),
        rate: Some(0.03),
        option_type: Some(if i % 2 == 0 { "call" } else { "put" }.to_string()),
        subtype: Some(if barrier { "barrier" } else { "vanilla" }.to_string()),
        maturity_date: Some("2025-01-02".to_string()),
        currency: Some("USD".to_string()),
        barrier_type: barrier.then(|| "up-and-out".to_string()),
        barrier_level: barrier.then_some(130.0),
        ..Default::default()
    };
    // Records above are well-formed by construction
    OptionSpec::from_record(&record, valuation()).unwrap()
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_npv");
    let vanilla = make_spec(1);
    let barrier = make_spec(0);

    group.bench_function("vanilla", |b| {
        b.iter(|| price(black_box(&vanilla), black_box(valuation())))
    });
    group.bench_function("barrier", |b| {
        b.iter(|| price(black_box(&barrier), black_box(valuation())))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [100, 1_000, 10_000] {
        let specs: Vec<OptionSpec> = (0..size).map(make_spec).collect();

        group.bench_with_input(BenchmarkId::new("parallel", size), &specs, |b, specs| {
            b.iter(|| price_batch(black_box(specs), valuation()))
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &specs, |b, specs| {
            b.iter(|| price_batch_sequential(black_box(specs), valuation()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
