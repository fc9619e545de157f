use chrono::NaiveDate;
use serde::Serialize;

use super::range::ReportRange;

/// Final result of a successful run, serialized as the program output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub date: NaiveDate,
    pub report_range_start: u32,
    pub report_range_end: u32,
    pub total_payout: u64,
}

impl RunSummary {
    pub fn new(date: NaiveDate, range: ReportRange, total_payout: u64) -> Self {
        Self {
            date,
            report_range_start: range.start(),
            report_range_end: range.end(),
            total_payout,
        }
    }
}
