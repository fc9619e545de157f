use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::outcome::Outcome;
use super::queue::JobQueue;
use crate::engine::Summarizer;
use crate::fetch::ReportSource;

/// Fixed-size pool of workers draining a [`JobQueue`]
///
/// Each worker pulls one report at a time, folds it through the shared
/// [`Summarizer`] and publishes exactly one [`Outcome`] per report.
pub struct WorkerPool<R> {
    source: Arc<R>,
    summarizer: Summarizer,
    workers: usize,
}

impl<R> WorkerPool<R>
where
    R: ReportSource + 'static,
{
    /// Create a pool of `workers` workers (at least one)
    pub fn new(source: Arc<R>, summarizer: Summarizer, workers: usize) -> Self {
        Self {
            source,
            summarizer,
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Spawn every worker as its own tokio task
    ///
    /// Workers stop when the queue is drained, when `cancel` fires, or when the
    /// outcome receiver is dropped. Each handle resolves to the number of
    /// reports that worker published.
    pub fn spawn(
        &self,
        queue: Arc<JobQueue>,
        outcomes: mpsc::Sender<Outcome>,
        cancel: CancellationToken,
    ) -> Vec<JoinHandle<usize>> {
        (0..self.workers)
            .map(|worker_id| {
                let worker = Worker {
                    id: worker_id,
                    source: Arc::clone(&self.source),
                    summarizer: self.summarizer.clone(),
                    queue: Arc::clone(&queue),
                    outcomes: outcomes.clone(),
                    cancel: cancel.clone(),
                };
                tokio::spawn(worker.run())
            })
            .collect()
    }
}

struct Worker<R> {
    id: usize,
    source: Arc<R>,
    summarizer: Summarizer,
    queue: Arc<JobQueue>,
    outcomes: mpsc::Sender<Outcome>,
    cancel: CancellationToken,
}

impl<R> Worker<R>
where
    R: ReportSource,
{
    async fn run(self) -> usize {
        let mut published = 0;

        loop {
            let report = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                next = self.queue.pull() => match next {
                    Some(report) => report,
                    None => break,
                },
            };

            debug!(worker_id = self.id, %report, "Worker picked up report");

            let result = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                result = self.source.summarize(report, &self.summarizer) => result,
            };

            if self.outcomes.send(Outcome::new(report, result)).await.is_err() {
                break;
            }
            published += 1;
        }

        debug!(worker_id = self.id, published, "Worker stopped");
        published
    }
}
