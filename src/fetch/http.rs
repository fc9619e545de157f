use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::{Client, StatusCode};
use tokio_util::compat::TokioAsyncReadCompatExt;
use tokio_util::io::StreamReader;
use tracing::debug;

use super::error::FetchError;
use super::source::ReportSource;
use crate::domain::ReportId;
use crate::engine::Summarizer;
use crate::io::PayoutEntryStream;

/// First transport error seen while streaming a response body
type BodyFailure = Arc<Mutex<Option<reqwest::Error>>>;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches reports over HTTP from `{base_url}/payouts/{n}`
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    client: Client,
    base_url: String,
}

impl HttpReportSource {
    /// Create a source with no request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, None)
    }

    /// Create a source, optionally bounding each request with `timeout`
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for one report
    pub fn report_url(&self, report: ReportId) -> String {
        format!("{}/payouts/{}", self.base_url, report)
    }
}

impl HttpReportSource {
    /// Send the request and wrap a 200 body as an entry stream
    ///
    /// Body read failures reach the parser as plain I/O errors; the original
    /// `reqwest::Error` is kept in the returned slot.
    async fn open_body(
        &self,
        report: ReportId,
    ) -> Result<(PayoutEntryStream, BodyFailure), FetchError> {
        let url = self.report_url(report);
        debug!(%report, %url, "Requesting report");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { report, source })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { report, status });
        }

        let failure = BodyFailure::default();
        let slot = Arc::clone(&failure);
        let body = Box::pin(response.bytes_stream().map_err(move |e| {
            let reason = e.to_string();
            if let Ok(mut slot) = slot.lock() {
                slot.get_or_insert(e);
            }
            io::Error::other(reason)
        }));
        let reader = StreamReader::new(body).compat();

        Ok((PayoutEntryStream::new(reader), failure))
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn open(&self, report: ReportId) -> Result<PayoutEntryStream, FetchError> {
        let (entries, _) = self.open_body(report).await?;
        Ok(entries)
    }

    /// Timeouts and resets while the body streams are transport errors,
    /// not row read errors
    async fn summarize(&self, report: ReportId, summarizer: &Summarizer) -> Result<u64, FetchError> {
        let (entries, failure) = self.open_body(report).await?;
        summarizer.summarize(entries).await.map_err(|source| {
            let transport = failure.lock().ok().and_then(|mut slot| slot.take());
            match transport {
                Some(transport) => FetchError::Transport {
                    report,
                    source: transport,
                },
                None => FetchError::Report { report, source },
            }
        })
    }
}
