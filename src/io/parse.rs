use chrono::NaiveDate;
use csv_async::StringRecord;

use super::error::ParseError;
use crate::domain::PayoutEntry;

/// Exact header every payout report must start with
pub const HEADER: [&str; 3] = ["date", "name", "amount"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check that the first record is exactly `date,name,amount`
pub fn validate_header(record: &StringRecord) -> Result<(), ParseError> {
    if record.len() == HEADER.len() && record.iter().zip(HEADER).all(|(found, want)| found == want)
    {
        return Ok(());
    }

    Err(ParseError::Header {
        found: record.iter().collect::<Vec<_>>().join(","),
    })
}

/// Borrowed view of one data row, before field validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPayoutRecord<'a> {
    pub date: &'a str,
    pub name: &'a str,
    pub amount: &'a str,
}

impl<'a> RawPayoutRecord<'a> {
    /// Split a CSV record into its three fields
    pub fn from_record(record: &'a StringRecord, line: u64) -> Result<Self, ParseError> {
        match (record.get(0), record.get(1), record.get(2), record.len()) {
            (Some(date), Some(name), Some(amount), 3) => Ok(Self { date, name, amount }),
            (.., len) => Err(ParseError::RowRead {
                line,
                reason: format!("expected 3 fields, found {}", len),
            }),
        }
    }

    /// Validate each field and build a [`PayoutEntry`]
    pub fn parse(self, line: u64) -> Result<PayoutEntry, ParseError> {
        let date = parse_date(self.date).ok_or_else(|| ParseError::InvalidDate {
            line,
            value: self.date.to_string(),
        })?;

        if self.name.is_empty() {
            return Err(ParseError::EmptyName { line });
        }

        let amount = parse_amount(self.amount).ok_or_else(|| ParseError::InvalidAmount {
            line,
            value: self.amount.to_string(),
        })?;

        PayoutEntry::new(date, self.name, amount).map_err(|_| ParseError::EmptyName { line })
    }
}

/// Strict `YYYY-MM-DD`; zero padding is required
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shaped = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Unsigned decimal that fits in 64 bits; signs are rejected
fn parse_amount(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
