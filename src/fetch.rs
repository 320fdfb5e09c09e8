//! Front-page retrieval over HTTP.
//!
//! The poller talks to the network through the [`Fetch`] trait so that the
//! pipeline can be exercised in tests without touching the network. The one
//! production implementation, [`HttpFetcher`], wraps a shared `reqwest`
//! client configured with a descriptive user agent and a request timeout.
//!
//! The request timeout turns a hung connection into an ordinary fetch
//! failure for that source and cycle. It is not a shutdown mechanism: a
//! fetch already in flight when shutdown is signaled is allowed to finish.

use thiserror::Error;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("headline_watch/", env!("CARGO_PKG_VERSION"));

/// Upper bound on one request, and thus on one source's share of a cycle.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors from retrieving a front page.
///
/// Both variants are recoverable per source: the poller logs them and moves
/// on to the next source in the same cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connect, TLS, timeout, or body read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Retrieval of a page's text content by URL.
pub trait Fetch {
    async fn fetch_text(&self, url: &Url) -> Result<String, FetchError>;
}

/// Production fetcher backed by a shared `reqwest::Client`.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
