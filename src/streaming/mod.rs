pub mod aggregator;
pub mod error;
pub mod outcome;
pub mod pool;
pub mod processor;
pub mod queue;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use error::RunError;
pub use outcome::Outcome;
pub use pool::WorkerPool;
pub use processor::{PayoutProcessor, summarize_payouts};
pub use queue::JobQueue;
