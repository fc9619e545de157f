use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::ReportRange;

/// Default server hosting the payout reports
pub const DEFAULT_BASE_URL: &str = "https://codetest.stim.se";

/// Default number of concurrent report workers
pub const DEFAULT_WORKERS: usize = 8;

/// Upper bound on the number of concurrent report workers
pub const MAX_WORKERS: usize = 65_536;

/// Lowest report number accepted on the command line
pub const FIRST_REPORT: u32 = 1;

/// Highest report number accepted on the command line
pub const LAST_REPORT: u32 = 100;

/// Immutable settings for one summarizing run
///
/// Built once at startup and passed explicitly into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub date: NaiveDate,
    pub range: ReportRange,
    pub workers: usize,
    pub debug: bool,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl RunConfig {
    /// Create a configuration with default workers, server and no timeout
    pub fn new(date: NaiveDate, range: ReportRange) -> Self {
        Self {
            date,
            range,
            workers: DEFAULT_WORKERS,
            debug: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Set the number of concurrent workers, clamped to `1..=MAX_WORKERS`
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.clamp(1, MAX_WORKERS);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
