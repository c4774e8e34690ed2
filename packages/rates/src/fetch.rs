//! HTTP client for the National Bank of Serbia exchange-rate page.
//!
//! The bank endpoint rejects cross-origin callers, so every request goes
//! through a relay that prepends permissive CORS headers. The relay expects
//! the target URL appended verbatim to its own.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{RatesError, Result};

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Source of the raw exchange-rate HTML document.
///
/// The server depends on this trait rather than a concrete client, so tests
/// can swap in a canned document or a forced failure.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the rate table page rendered for `lang`.
    async fn fetch_table(&self, lang: &str) -> Result<String>;
}

/// `RateSource` backed by the live NBS page behind the CORS relay.
pub struct NbsClient {
    client: reqwest::Client,
    relay_url: String,
    upstream_url: String,
}

impl NbsClient {
    /// Create a client with a bounded request timeout.
    pub fn new(relay_url: impl Into<String>, upstream_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RatesError::Http)?;

        Ok(Self {
            client,
            relay_url: relay_url.into(),
            upstream_url: upstream_url.into(),
        })
    }

    /// Relay URL, upstream URL and language concatenated the way the relay
    /// expects: no URL-encoding of the embedded target.
    fn table_url(&self, lang: &str) -> String {
        format!("{}{}?lang={}", self.relay_url, self.upstream_url, lang)
    }
}

#[async_trait]
impl RateSource for NbsClient {
    async fn fetch_table(&self, lang: &str) -> Result<String> {
        let url = self.table_url(lang);
        debug!(url = %url, "fetching NBS rate table");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "NBS request failed");
            if e.is_timeout() {
                RatesError::Timeout { url: url.clone() }
            } else {
                RatesError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "NBS returned an error status");
            return Err(RatesError::Status { status });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                RatesError::Timeout { url: url.clone() }
            } else {
                RatesError::Http(e)
            }
        })
    }
}
