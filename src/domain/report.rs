use super::entry::PayoutEntry;
use super::error::DomainError;

/// A fully materialized payout report
///
/// The streaming pipeline never builds one of these; it exists for callers that
/// want every entry of a report in memory at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutReport {
    entries: Vec<PayoutEntry>,
}

impl PayoutReport {
    pub fn new(entries: Vec<PayoutEntry>) -> Self {
        Self { entries }
    }

    /// Keep only the entries matching `predicate`, preserving row order
    pub fn filter<F>(&self, predicate: F) -> PayoutReport
    where
        F: Fn(&PayoutEntry) -> bool,
    {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| predicate(*entry))
                .cloned()
                .collect(),
        }
    }

    /// Total amount across all entries
    pub fn sum(&self) -> Result<u64, DomainError> {
        self.entries.iter().try_fold(0u64, |total, entry| {
            total
                .checked_add(entry.amount())
                .ok_or(DomainError::Overflow)
        })
    }

    pub fn entries(&self) -> &[PayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PayoutEntry> for PayoutReport {
    fn from_iter<I: IntoIterator<Item = PayoutEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
