use std::sync::Arc;

use chrono::NaiveDate;
use futures::{Stream, StreamExt};

use super::error::EngineError;
use crate::domain::{DomainError, PayoutEntry, PayoutReport};
use crate::io::ParseError;

/// Decides which entries contribute to a summary
pub trait EntryFilter: Send + Sync {
    fn matches(&self, entry: &PayoutEntry) -> bool;
}

impl<F> EntryFilter for F
where
    F: Fn(&PayoutEntry) -> bool + Send + Sync,
{
    fn matches(&self, entry: &PayoutEntry) -> bool {
        self(entry)
    }
}

/// Keep entries dated exactly on the given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SameDate(pub NaiveDate);

impl EntryFilter for SameDate {
    fn matches(&self, entry: &PayoutEntry) -> bool {
        entry.date() == self.0
    }
}

/// Keep every entry
#[derive(Debug, Clone, Copy, Default)]
pub struct AllEntries;

impl EntryFilter for AllEntries {
    fn matches(&self, _entry: &PayoutEntry) -> bool {
        true
    }
}

/// Folds a matching entry into a running total
pub trait Accumulator: Send + Sync {
    fn accumulate(&self, total: u64, entry: &PayoutEntry) -> Result<u64, DomainError>;
}

/// Sum of entry amounts, failing on overflow
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountSum;

impl Accumulator for AmountSum {
    fn accumulate(&self, total: u64, entry: &PayoutEntry) -> Result<u64, DomainError> {
        total
            .checked_add(entry.amount())
            .ok_or(DomainError::Overflow)
    }
}

/// Filter and accumulation strategy applied to every report of a run
///
/// Cheap to clone; the filter and accumulator are shared between workers.
#[derive(Clone)]
pub struct Summarizer {
    filter: Arc<dyn EntryFilter>,
    accumulator: Arc<dyn Accumulator>,
}

impl Summarizer {
    pub fn new<F, A>(filter: F, accumulator: A) -> Self
    where
        F: EntryFilter + 'static,
        A: Accumulator + 'static,
    {
        Self {
            filter: Arc::new(filter),
            accumulator: Arc::new(accumulator),
        }
    }

    /// Sum of amounts for entries dated `date`
    pub fn same_date_total(date: NaiveDate) -> Self {
        Self::new(SameDate(date), AmountSum)
    }

    /// Fold an entry stream without collecting it
    ///
    /// Stops at the first parse or accumulation error.
    pub async fn summarize<S>(&self, mut entries: S) -> Result<u64, EngineError>
    where
        S: Stream<Item = Result<PayoutEntry, ParseError>> + Unpin,
    {
        let mut total = 0u64;

        while let Some(entry) = entries.next().await {
            let entry = entry?;
            if self.filter.matches(&entry) {
                total = self.accumulator.accumulate(total, &entry)?;
            }
        }

        Ok(total)
    }

    /// Same reduction over an already materialized report
    pub fn summarize_report(&self, report: &PayoutReport) -> Result<u64, DomainError> {
        report
            .entries()
            .iter()
            .filter(|entry| self.filter.matches(entry))
            .try_fold(0u64, |total, entry| self.accumulator.accumulate(total, entry))
    }
}
