use tokio::sync::{Mutex, mpsc};

use crate::domain::ReportId;

/// Pre-populated, closed queue of report jobs shared by all workers
///
/// Every job is enqueued up front and the sending half is dropped, so once the
/// queue drains `pull` returns `None` immediately instead of waiting.
#[derive(Debug)]
pub struct JobQueue {
    receiver: Mutex<mpsc::Receiver<ReportId>>,
    submitted: usize,
}

impl JobQueue {
    /// Enqueue `jobs` in iteration order and close the queue
    pub fn new<I>(jobs: I) -> Self
    where
        I: IntoIterator<Item = ReportId>,
    {
        let jobs: Vec<ReportId> = jobs.into_iter().collect();
        let (sender, receiver) = mpsc::channel(jobs.len().max(1));

        // Capacity covers every job, so try_send only fails if the receiver is gone
        let mut submitted = 0;
        for job in jobs {
            if sender.try_send(job).is_ok() {
                submitted += 1;
            }
        }

        Self {
            receiver: Mutex::new(receiver),
            submitted,
        }
    }

    /// Take the next job, or `None` once the queue is drained
    pub async fn pull(&self) -> Option<ReportId> {
        self.receiver.lock().await.recv().await
    }

    /// Number of jobs enqueued at construction
    pub fn len(&self) -> usize {
        self.submitted
    }

    pub fn is_empty(&self) -> bool {
        self.submitted == 0
    }
}
