pub mod error;
pub mod summarizer;

// Re-export commonly used types
pub use error::EngineError;
pub use summarizer::{Accumulator, AllEntries, AmountSum, EntryFilter, SameDate, Summarizer};
