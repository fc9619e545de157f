//! Concurrent summarizer for remote CSV payout reports
//!
//! Reports are streamed, validated row by row, filtered and folded into a
//! partial sum by a bounded pool of workers. The first failing report aborts
//! the whole run.

pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod fetch;
pub mod io;
pub mod prelude;
pub mod streaming;
