use std::io;
use thiserror::Error;

use crate::streaming::RunError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Report fetch/parse error: {0}")]
    Run(#[from] RunError),
}
