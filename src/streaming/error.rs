use thiserror::Error;

use crate::fetch::FetchError;

/// Terminal error of a summarizing run
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Total payout overflowed")]
    Overflow,

    #[error("Workers stopped after {received} of {expected} reports")]
    Incomplete { received: usize, expected: usize },
}
