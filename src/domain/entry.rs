use chrono::NaiveDate;

use super::error::DomainError;

/// A single validated row of a payout report
///
/// Fields are private so an entry can only be built through [`PayoutEntry::new`],
/// which enforces a non-empty name. The amount is unsigned by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutEntry {
    date: NaiveDate,
    name: String,
    amount: u64,
}

impl PayoutEntry {
    /// Create a new entry, rejecting an empty name
    pub fn new(date: NaiveDate, name: impl Into<String>, amount: u64) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }

        Ok(Self { date, name, amount })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }
}
