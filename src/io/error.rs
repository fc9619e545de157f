use std::io;
use thiserror::Error;

/// Errors raised while streaming a payout report
///
/// Every row-level variant carries the 1-indexed record line where parsing stopped;
/// the header is always line 1.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("CSV header error at line 1: expected `date,name,amount`, found `{found}`")]
    Header { found: String },

    #[error("CSV read error at line {line}: {reason}")]
    RowRead { line: u64, reason: String },

    #[error("CSV parse error, invalid date at line {line}: `{value}`")]
    InvalidDate { line: u64, value: String },

    #[error("CSV parse error, empty name at line {line}")]
    EmptyName { line: u64 },

    #[error("CSV parse error, invalid amount at line {line}: `{value}`")]
    InvalidAmount { line: u64, value: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// Source line the error is attributed to, if any
    pub fn line(&self) -> Option<u64> {
        match self {
            ParseError::Header { .. } => Some(1),
            ParseError::RowRead { line, .. }
            | ParseError::InvalidDate { line, .. }
            | ParseError::EmptyName { line }
            | ParseError::InvalidAmount { line, .. } => Some(*line),
            ParseError::Io(_) => None,
        }
    }
}
