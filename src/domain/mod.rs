pub mod entry;
pub mod error;
pub mod range;
pub mod report;
pub mod summary;

// Re-export commonly used types
pub use entry::PayoutEntry;
pub use error::DomainError;
pub use range::{ReportId, ReportRange};
pub use report::PayoutReport;
pub use summary::RunSummary;
