mod common;

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use payouts::prelude::*;
use tokio::runtime::Runtime;

use common::memory_source;

/// Benchmark a full 100-report run with varying worker counts
fn bench_worker_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("worker_scaling");
    let runtime = Runtime::new().unwrap();
    let source = Arc::new(memory_source(100, 1_000));
    let range = ReportRange::new(1, 100).unwrap();

    for workers in [1, 2, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.to_async(&runtime).iter(|| {
                let processor = PayoutProcessor::new(
                    Arc::clone(&source),
                    Summarizer::same_date_total("2025-05-04".parse().unwrap()),
                )
                .with_workers(workers);

                async move { black_box(processor.process(range).await.unwrap()) }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_worker_scaling);
criterion_main!(benches);
