use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::ReportId;
use crate::engine::EngineError;

/// Errors raised while fetching and summarizing one report
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request error for report {report}: {source}")]
    Transport {
        report: ReportId,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned status {status} for report {report}")]
    Status { report: ReportId, status: StatusCode },

    #[error("Report {report}: {source}")]
    Report {
        report: ReportId,
        #[source]
        source: EngineError,
    },
}

impl FetchError {
    /// Report the error belongs to
    pub fn report(&self) -> ReportId {
        match self {
            FetchError::Transport { report, .. }
            | FetchError::Status { report, .. }
            | FetchError::Report { report, .. } => *report,
        }
    }
}
