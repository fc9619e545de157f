use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::Parser;
use reqwest::Url;

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_WORKERS, FIRST_REPORT, LAST_REPORT, MAX_WORKERS, RunConfig,
};
use crate::domain::ReportRange;
use crate::io::parse_date;

/// Sum the payouts made on one date across a range of remote payout reports
#[derive(Parser, Debug)]
#[command(name = "payouts", version)]
pub struct Args {
    /// Target date as YYYY-MM-DD. Defaults to the current date.
    #[arg(long, value_parser = date_arg)]
    pub date: Option<NaiveDate>,

    /// Single report number in [1, 100]. Overrides --range.
    #[arg(long, value_parser = report_arg)]
    pub report: Option<u32>,

    /// Inclusive report range A,B with both ends in [1, 100] and B >= A.
    #[arg(long, value_parser = range_arg, default_value = "1,100")]
    pub range: ReportRange,

    /// Maximum number of reports downloaded in parallel, in [1, 65536].
    #[arg(long, value_parser = limit_arg, default_value_t = DEFAULT_WORKERS)]
    pub limit: usize,

    /// Enable debug logging on stderr.
    #[arg(long)]
    pub debug: bool,

    /// Server hosting the reports at /payouts/{n}.
    #[arg(long, env = "PAYOUTS_BASE_URL", value_parser = base_url_arg, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds. No timeout when omitted.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    /// Resolve defaults into the run configuration
    pub fn into_config(self) -> RunConfig {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let range = self.report.map(ReportRange::single).unwrap_or(self.range);

        RunConfig::new(date, range)
            .with_workers(self.limit)
            .with_debug(self.debug)
            .with_base_url(self.base_url)
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }
}

fn date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| "invalid date, expected format is YYYY-MM-DD".to_string())
}

fn report_arg(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if (FIRST_REPORT..=LAST_REPORT).contains(&n) => Ok(n),
        _ => Err(format!(
            "expected integer in range [{}, {}]",
            FIRST_REPORT, LAST_REPORT
        )),
    }
}

fn range_arg(value: &str) -> Result<ReportRange, String> {
    let (start, end) = value
        .split_once(',')
        .ok_or_else(|| "expected pair of integers, e.g. 1,10".to_string())?;

    let start = report_arg(start).map_err(|e| format!("invalid range start: {}", e))?;
    let end = report_arg(end).map_err(|e| format!("invalid range end: {}", e))?;

    ReportRange::new(start, end).map_err(|e| e.to_string())
}

fn limit_arg(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_WORKERS).contains(&n) => Ok(n),
        _ => Err(format!("expected integer in range [1, {}]", MAX_WORKERS)),
    }
}

fn base_url_arg(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL: {}", e))?;
    match url.scheme() {
        "http" | "https" => Ok(value.to_string()),
        scheme => Err(format!("unsupported URL scheme `{}`", scheme)),
    }
}
