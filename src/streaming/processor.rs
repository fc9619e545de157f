use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::aggregator::Aggregator;
use super::error::RunError;
use super::pool::WorkerPool;
use super::queue::JobQueue;
use crate::config::{DEFAULT_WORKERS, RunConfig};
use crate::domain::{ReportRange, RunSummary};
use crate::engine::Summarizer;
use crate::fetch::ReportSource;

/// Primary API for summarizing a range of reports
///
/// Fills a [`JobQueue`] with the range, runs a [`WorkerPool`] over it and
/// merges the outcomes with an [`Aggregator`]. On the first failure the
/// remaining workers are cancelled and joined before the error is returned.
pub struct PayoutProcessor<R> {
    source: Arc<R>,
    summarizer: Summarizer,
    workers: usize,
}

impl<R> PayoutProcessor<R>
where
    R: ReportSource + 'static,
{
    /// Create a new processor over a shared report source
    ///
    /// # Example
    /// ```rust,ignore
    /// let source = Arc::new(HttpReportSource::new(DEFAULT_BASE_URL)?);
    /// let total = PayoutProcessor::new(source, Summarizer::same_date_total(date))
    ///     .with_workers(8)
    ///     .process(ReportRange::new(1, 100)?)
    ///     .await?;
    /// ```
    pub fn new(source: Arc<R>, summarizer: Summarizer) -> Self {
        Self {
            source,
            summarizer,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Set the number of concurrent workers (defaults to 8, minimum 1)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Summarize every report in `range`
    pub async fn process(&self, range: ReportRange) -> Result<u64, RunError> {
        let queue = Arc::new(JobQueue::new(range.iter()));
        let expected = queue.len();
        let (sender, mut receiver) = mpsc::channel(expected.max(1));

        let cancel = CancellationToken::new();
        // Workers also stop if this future is dropped mid-run
        let _guard = cancel.clone().drop_guard();

        let pool = WorkerPool::new(Arc::clone(&self.source), self.summarizer.clone(), self.workers);
        let handles = pool.spawn(queue, sender, cancel.clone());
        info!(
            start = range.start(),
            end = range.end(),
            workers = pool.workers(),
            "Spawned report workers"
        );

        let result = Aggregator::new(expected).collect(&mut receiver).await;
        if result.is_err() {
            cancel.cancel();
        }
        drop(receiver);

        let mut published = 0;
        for joined in join_all(handles).await {
            match joined {
                Ok(count) => published += count,
                Err(e) => warn!(error = %e, "Report worker did not finish cleanly"),
            }
        }
        debug!(published, expected, "All report workers stopped");

        result
    }
}

/// Run the whole pipeline described by `config` against `source`
pub async fn summarize_payouts<R>(source: Arc<R>, config: &RunConfig) -> Result<RunSummary, RunError>
where
    R: ReportSource + 'static,
{
    let total = PayoutProcessor::new(source, Summarizer::same_date_total(config.date))
        .with_workers(config.workers)
        .process(config.range)
        .await?;

    Ok(RunSummary::new(config.date, config.range, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportId;
    use crate::fetch::{FetchError, MemoryReportSource};
    use crate::io::PayoutEntryStream;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    fn report(id: u32) -> String {
        format!(
            "date,name,amount\n2025-05-04,Payee {id},{id}\n2025-05-05,Other {id},1000\n",
            id = id
        )
    }

    fn memory_source(reports: u32) -> MemoryReportSource {
        (1..=reports).fold(MemoryReportSource::new(), |source, id| {
            source.with_report(id, report(id))
        })
    }

    /// Counts how many times each report is opened
    struct CountingSource {
        inner: MemoryReportSource,
        opened: Mutex<HashMap<ReportId, usize>>,
    }

    impl CountingSource {
        fn new(inner: MemoryReportSource) -> Self {
            Self {
                inner,
                opened: Mutex::new(HashMap::new()),
            }
        }

        fn opened(&self) -> HashMap<ReportId, usize> {
            self.opened.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReportSource for CountingSource {
        async fn open(&self, report: ReportId) -> Result<PayoutEntryStream, FetchError> {
            *self.opened.lock().unwrap().entry(report).or_default() += 1;
            tokio::time::sleep(Duration::from_millis(u64::from(report.get() % 3))).await;
            self.inner.open(report).await
        }
    }

    /// Report 1 fails at once; every other report never completes
    struct StallingSource;

    #[async_trait]
    impl ReportSource for StallingSource {
        async fn open(&self, report: ReportId) -> Result<PayoutEntryStream, FetchError> {
            if report.get() == 1 {
                return Err(FetchError::Status {
                    report,
                    status: StatusCode::SERVICE_UNAVAILABLE,
                });
            }
            futures::future::pending().await
        }
    }

    fn date() -> chrono::NaiveDate {
        "2025-05-04".parse().unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn every_report_processed_exactly_once_for_any_worker_count() {
        let range = ReportRange::new(1, 20).unwrap();
        let expected: u64 = (1..=20).sum();

        for workers in [1, 3, 20, 64] {
            let source = Arc::new(CountingSource::new(memory_source(20)));
            let total = PayoutProcessor::new(Arc::clone(&source), Summarizer::same_date_total(date()))
                .with_workers(workers)
                .process(range)
                .await
                .unwrap();

            assert_eq!(total, expected, "workers = {}", workers);
            let opened = source.opened();
            assert_eq!(opened.len(), 20, "workers = {}", workers);
            assert!(opened.values().all(|&count| count == 1), "workers = {}", workers);
        }
    }

    #[tokio::test]
    async fn single_report_range() {
        let source = Arc::new(memory_source(5));
        let total = PayoutProcessor::new(source, Summarizer::same_date_total(date()))
            .process(ReportRange::single(4))
            .await
            .unwrap();

        assert_eq!(total, 4);
    }

    #[tokio::test]
    async fn failing_report_fails_the_run() {
        // Report 6 is missing from the source
        let source = Arc::new(memory_source(5));
        let result = PayoutProcessor::new(source, Summarizer::same_date_total(date()))
            .with_workers(2)
            .process(ReportRange::new(1, 6).unwrap())
            .await;

        match result {
            Err(RunError::Fetch(e)) => assert_eq!(e.report(), ReportId::new(6)),
            other => panic!("Expected Fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_report_fails_the_run() {
        let source = Arc::new(
            memory_source(3).with_report(2, "date,name,amount\n2025-05-04,Alice,-5\n"),
        );
        let result = PayoutProcessor::new(source, Summarizer::same_date_total(date()))
            .process(ReportRange::new(1, 3).unwrap())
            .await;

        assert!(matches!(
            result,
            Err(RunError::Fetch(FetchError::Report { .. }))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn first_failure_cancels_stalled_workers() {
        let processor = PayoutProcessor::new(Arc::new(StallingSource), Summarizer::same_date_total(date()))
            .with_workers(4);

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            processor.process(ReportRange::new(1, 8).unwrap()),
        )
        .await
        .expect("run should stop once a report fails");

        match result {
            Err(RunError::Fetch(e)) => assert_eq!(e.report(), ReportId::new(1)),
            other => panic!("Expected Fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn summarize_payouts_builds_summary() {
        let config = RunConfig::new(date(), ReportRange::new(2, 4).unwrap()).with_workers(2);
        let summary = summarize_payouts(Arc::new(memory_source(5)), &config)
            .await
            .unwrap();

        assert_eq!(summary.date, date());
        assert_eq!(summary.report_range_start, 2);
        assert_eq!(summary.report_range_end, 4);
        assert_eq!(summary.total_payout, 9);
    }
}
