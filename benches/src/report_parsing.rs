mod common;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use futures::io::Cursor;
use payouts::prelude::*;
use tokio::runtime::Runtime;

use common::generate_report;

/// Benchmark streaming parse + same-date sum throughput
fn bench_streaming_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming_summary");
    let runtime = Runtime::new().unwrap();
    let summarizer = Summarizer::same_date_total("2025-05-04".parse().unwrap());

    for rows in [1_000, 10_000, 100_000] {
        let csv = generate_report(rows, 7);
        group.throughput(Throughput::Bytes(csv.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.to_async(&runtime).iter(|| async {
                let entries = PayoutEntryStream::new(Cursor::new(csv.as_bytes().to_vec()));
                black_box(summarizer.summarize(entries).await.unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark the materializing path for comparison
fn bench_materialized_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialized_summary");
    let runtime = Runtime::new().unwrap();
    let date: chrono::NaiveDate = "2025-05-04".parse().unwrap();

    for rows in [1_000, 10_000, 100_000] {
        let csv = generate_report(rows, 7);
        group.throughput(Throughput::Bytes(csv.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.to_async(&runtime).iter(|| async {
                let report = PayoutEntryStream::new(Cursor::new(csv.as_bytes().to_vec()))
                    .into_report()
                    .await
                    .unwrap();
                black_box(report.filter(|e| e.date() == date).sum().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_streaming_summary, bench_materialized_summary);
criterion_main!(benches);
