pub mod error;
pub mod http;
pub mod memory;
pub mod source;

// Re-export commonly used types
pub use error::FetchError;
pub use http::HttpReportSource;
pub use memory::MemoryReportSource;
pub use source::ReportSource;
