//! Upstream HTTP fetch adapter
//!
//! This module wraps the HTTP client used to pull raw JSON payloads from the
//! configured source endpoints. One client is built at startup and shared by
//! reference across all fetches; there is no hidden process-wide instance.

use crate::config::HttpConfig;
use crate::domain::{Result, SiphonError};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for upstream source endpoints
///
/// Issues exactly one GET per fetch, no retries. Timeouts come from
/// [`HttpConfig`]; everything else is the transport default.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    /// Create a new upstream client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                SiphonError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// Fetch the raw response body from a URL
    ///
    /// Performs a single GET and returns the body as UTF-8 text. A non-2xx
    /// status is surfaced as a network error naming the status, not treated
    /// as data.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SiphonError::Network(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SiphonError::Network(format!(
                "GET {url} returned status {status}: {body}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SiphonError::Network(format!("Failed to read body from {url}: {e}")))?;

        tracing::debug!(url = %url, bytes = body.len(), "Fetched upstream payload");

        Ok(body)
    }
}
