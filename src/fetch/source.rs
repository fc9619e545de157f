use async_trait::async_trait;

use super::error::FetchError;
use crate::domain::ReportId;
use crate::engine::Summarizer;
use crate::io::PayoutEntryStream;

/// Where payout reports come from
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Open a streaming reader over one report
    async fn open(&self, report: ReportId) -> Result<PayoutEntryStream, FetchError>;

    /// Open a report and fold it through `summarizer`
    ///
    /// The entry stream is dropped on every return path, which releases the
    /// underlying connection or file.
    async fn summarize(&self, report: ReportId, summarizer: &Summarizer) -> Result<u64, FetchError> {
        let entries = self.open(report).await?;
        summarizer
            .summarize(entries)
            .await
            .map_err(|source| FetchError::Report { report, source })
    }
}
