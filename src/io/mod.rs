pub mod csv_reader;
pub mod error;
pub mod parse;
pub mod summary_writer;

// Re-export commonly used types
pub use csv_reader::PayoutEntryStream;
pub use error::ParseError;
pub use parse::{HEADER, RawPayoutRecord, parse_date};
pub use summary_writer::write_summary;
