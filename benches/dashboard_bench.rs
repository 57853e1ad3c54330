//! Benchmarks for Bankview chart data derivation
//!
//! Run with: cargo bench

use bankview::chart::{build_chart_spec, AppRecord, ChartMetric};
use bankview::format::{format_number, group_thousands};
use bankview::palette::{allocate_colors, Palette};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_test_records(count: usize) -> Vec<AppRecord> {
    (0..count)
        .map(|i| {
            AppRecord::new(format!("Bank {}", i), (i % 50) as f64 / 10.0, i as u64 * 1000)
                .reviews(i as u64)
        })
        .collect()
}

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    for size in [8, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        for palette in Palette::all() {
            group.bench_function(format!("{}_{}", palette, size), |b| {
                b.iter(|| allocate_colors(black_box(size), black_box(palette)))
            });
        }
    }

    group.finish();
}

fn bench_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");

    for size in [10, 100, 1000] {
        let records = create_test_records(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("rating_spec_{}", size), |b| {
            b.iter(|| build_chart_spec(black_box(&records), ChartMetric::Rating, &Palette::Multicolor))
        });

        group.bench_function(format!("installs_spec_{}", size), |b| {
            b.iter(|| build_chart_spec(black_box(&records), ChartMetric::Installs, &Palette::Blue))
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("format_number", |b| {
        b.iter(|| format_number(black_box(2_534_112.0)))
    });

    group.bench_function("group_thousands", |b| {
        b.iter(|| group_thousands(black_box(2_534_112.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_palette, bench_chart, bench_format);
criterion_main!(benches);
