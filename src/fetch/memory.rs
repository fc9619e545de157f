use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::io::Cursor;
use reqwest::StatusCode;

use super::error::FetchError;
use super::source::ReportSource;
use crate::domain::ReportId;
use crate::io::PayoutEntryStream;

/// In-memory report source keyed by report id
///
/// Unknown ids answer with a 404 status error, like a missing remote report.
#[derive(Debug, Clone, Default)]
pub struct MemoryReportSource {
    reports: HashMap<ReportId, Arc<str>>,
}

impl MemoryReportSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the CSV body served for `report` (fluent interface)
    pub fn with_report(mut self, report: impl Into<ReportId>, body: impl Into<Arc<str>>) -> Self {
        self.reports.insert(report.into(), body.into());
        self
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[async_trait]
impl ReportSource for MemoryReportSource {
    async fn open(&self, report: ReportId) -> Result<PayoutEntryStream, FetchError> {
        let body = self.reports.get(&report).ok_or(FetchError::Status {
            report,
            status: StatusCode::NOT_FOUND,
        })?;

        Ok(PayoutEntryStream::new(Cursor::new(body.as_bytes().to_vec())))
    }
}
