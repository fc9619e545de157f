//! Prelude module for convenient imports
//!
//! Import everything you need with: `use payouts::prelude::*;`

// Domain types
pub use crate::domain::{DomainError, PayoutEntry, PayoutReport, ReportId, ReportRange, RunSummary};

// Configuration
pub use crate::config::{DEFAULT_BASE_URL, DEFAULT_WORKERS, MAX_WORKERS, RunConfig};

// Engine types
pub use crate::engine::{
    Accumulator, AllEntries, AmountSum, EngineError, EntryFilter, SameDate, Summarizer,
};

// IO types
pub use crate::io::{ParseError, PayoutEntryStream, write_summary};

// Fetch types
pub use crate::fetch::{FetchError, HttpReportSource, MemoryReportSource, ReportSource};

// Streaming types
pub use crate::streaming::{
    Aggregator, JobQueue, Outcome, PayoutProcessor, RunError, WorkerPool, summarize_payouts,
};

// App types
pub use crate::app::{AppError, Args, CliApp, init_tracing};
