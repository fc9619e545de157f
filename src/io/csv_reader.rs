use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::{AsyncReaderBuilder, StringRecord};
use futures::io::AsyncRead;
use futures::{Stream, StreamExt, TryStreamExt, stream};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::ParseError;
use super::parse::{RawPayoutRecord, validate_header};
use crate::domain::{PayoutEntry, PayoutReport};

type RecordStream = Pin<Box<dyn Stream<Item = Result<StringRecord, csv_async::Error>> + Send>>;

/// Lazy, validated stream of payout entries read from CSV input
///
/// The header is checked before the first entry is produced. Records are parsed
/// one at a time, so memory use does not depend on report size. The stream ends
/// after the first error.
pub struct PayoutEntryStream {
    inner: Pin<Box<dyn Stream<Item = Result<PayoutEntry, ParseError>> + Send>>,
}

impl PayoutEntryStream {
    /// Create a new entry stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let records = AsyncReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv_async::Trim::None)
            .create_reader(reader)
            .into_records();

        let state = RecordParser {
            records: Box::pin(records),
            line: 0,
            header_read: false,
            finished: false,
        };

        let stream = stream::unfold(state, |mut state| async move {
            let item = state.next_entry().await?;
            Some((item, state))
        });

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new entry stream from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let entries = PayoutEntryStream::from_file("1.csv").await?;
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }

    /// Read every entry into memory
    ///
    /// Only meant for small reports; the summarizing pipeline never calls this.
    pub async fn into_report(self) -> Result<PayoutReport, ParseError> {
        let entries: Vec<PayoutEntry> = self.try_collect().await?;
        Ok(PayoutReport::new(entries))
    }
}

impl Stream for PayoutEntryStream {
    type Item = Result<PayoutEntry, ParseError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

struct RecordParser {
    records: RecordStream,
    line: u64,
    header_read: bool,
    finished: bool,
}

impl RecordParser {
    async fn next_entry(&mut self) -> Option<Result<PayoutEntry, ParseError>> {
        if self.finished {
            return None;
        }

        if !self.header_read
            && let Err(e) = self.read_header().await
        {
            return self.fail(e);
        }

        self.line += 1;
        let line = self.line;

        let parsed = match self.records.next().await {
            None => {
                self.finished = true;
                return None;
            }
            Some(Err(e)) => Err(ParseError::RowRead {
                line,
                reason: e.to_string(),
            }),
            Some(Ok(record)) => {
                RawPayoutRecord::from_record(&record, line).and_then(|raw| raw.parse(line))
            }
        };

        match parsed {
            Ok(entry) => Some(Ok(entry)),
            Err(e) => self.fail(e),
        }
    }

    async fn read_header(&mut self) -> Result<(), ParseError> {
        self.header_read = true;
        self.line = 1;

        match self.records.next().await {
            Some(Ok(record)) => validate_header(&record),
            Some(Err(e)) => Err(ParseError::RowRead {
                line: 1,
                reason: e.to_string(),
            }),
            None => Err(ParseError::Header {
                found: String::new(),
            }),
        }
    }

    fn fail(&mut self, error: ParseError) -> Option<Result<PayoutEntry, ParseError>> {
        self.finished = true;
        Some(Err(error))
    }
}
