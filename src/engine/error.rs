use thiserror::Error;

use crate::domain::DomainError;
use crate::io::ParseError;

/// Errors raised while summarizing a stream of entries
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
