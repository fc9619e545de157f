use thiserror::Error;

/// Domain-level errors for payout values and report ranges
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Payout entry name must not be empty")]
    EmptyName,

    #[error("Invalid report range: end {end} is before start {start}")]
    InvalidRange { start: u32, end: u32 },

    #[error("Payout sum overflowed")]
    Overflow,
}
