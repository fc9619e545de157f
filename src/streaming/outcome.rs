use crate::domain::ReportId;
use crate::fetch::FetchError;

/// The single result published for one report job
#[derive(Debug)]
pub struct Outcome {
    pub report: ReportId,
    pub result: Result<u64, FetchError>,
}

impl Outcome {
    pub fn new(report: ReportId, result: Result<u64, FetchError>) -> Self {
        Self { report, result }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
