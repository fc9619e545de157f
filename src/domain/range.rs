use std::fmt;

use super::error::DomainError;

/// Identifier of a remote payout report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportId(u32);

impl ReportId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ReportId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Inclusive range of report identifiers, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    start: u32,
    end: u32,
}

impl ReportRange {
    pub fn new(start: u32, end: u32) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering exactly one report
    pub fn single(id: u32) -> Self {
        Self { start: id, end: id }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of reports in the range (never zero)
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Report identifiers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = ReportId> + use<> {
        (self.start..=self.end).map(ReportId)
    }
}
