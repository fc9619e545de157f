use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::error::RunError;
use super::outcome::Outcome;

/// Merges per-report outcomes into a single total
///
/// Outcomes are consumed in arrival order. The first failure ends collection
/// immediately; later outcomes are neither awaited nor merged.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    expected: usize,
}

impl Aggregator {
    pub fn new(expected: usize) -> Self {
        Self { expected }
    }

    pub async fn collect(&self, outcomes: &mut mpsc::Receiver<Outcome>) -> Result<u64, RunError> {
        let mut total = 0u64;

        for received in 0..self.expected {
            let Some(outcome) = outcomes.recv().await else {
                return Err(RunError::Incomplete {
                    received,
                    expected: self.expected,
                });
            };

            match outcome.result {
                Ok(partial) => {
                    debug!(report = %outcome.report, partial, "Report summarized");
                    total = total.checked_add(partial).ok_or(RunError::Overflow)?;
                }
                Err(e) => {
                    warn!(report = %outcome.report, error = %e, "Report failed, aborting run");
                    return Err(e.into());
                }
            }
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportId;
    use crate::fetch::FetchError;
    use reqwest::StatusCode;

    fn ok(report: u32, sum: u64) -> Outcome {
        Outcome::new(ReportId::new(report), Ok(sum))
    }

    fn failed(report: u32) -> Outcome {
        Outcome::new(
            ReportId::new(report),
            Err(FetchError::Status {
                report: ReportId::new(report),
                status: StatusCode::BAD_GATEWAY,
            }),
        )
    }

    async fn collect(expected: usize, outcomes: Vec<Outcome>) -> Result<u64, RunError> {
        let (sender, mut receiver) = mpsc::channel(outcomes.len().max(1));
        for outcome in outcomes {
            sender.send(outcome).await.unwrap();
        }
        drop(sender);
        Aggregator::new(expected).collect(&mut receiver).await
    }

    #[tokio::test]
    async fn sums_successful_outcomes() {
        let total = collect(3, vec![ok(2, 300), ok(1, 500), ok(3, 0)]).await.unwrap();
        assert_eq!(total, 800);
    }

    #[tokio::test]
    async fn first_failure_wins() {
        let result = collect(4, vec![ok(1, 10), failed(3), failed(2), ok(4, 5)]).await;

        match result {
            Err(RunError::Fetch(e)) => assert_eq!(e.report(), ReportId::new(3)),
            other => panic!("Expected Fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn stops_reading_after_failure() {
        let (sender, mut receiver) = mpsc::channel(4);
        sender.send(failed(1)).await.unwrap();
        sender.send(ok(2, 100)).await.unwrap();

        let result = Aggregator::new(2).collect(&mut receiver).await;

        assert!(result.is_err());
        // The late outcome is left unread
        assert!(receiver.recv().await.is_some());
    }

    #[tokio::test]
    async fn missing_outcomes_are_incomplete() {
        let result = collect(3, vec![ok(1, 1)]).await;
        assert!(matches!(
            result,
            Err(RunError::Incomplete {
                received: 1,
                expected: 3
            })
        ));
    }

    #[tokio::test]
    async fn total_overflow_is_reported() {
        let result = collect(2, vec![ok(1, u64::MAX), ok(2, 1)]).await;
        assert!(matches!(result, Err(RunError::Overflow)));
    }

    #[tokio::test]
    async fn zero_expected_is_zero_total() {
        assert_eq!(collect(0, vec![]).await.unwrap(), 0);
    }
}
