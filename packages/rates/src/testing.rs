//! Mock rate source for testing.
//!
//! Provides a configurable mock implementation of the RateSource trait.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{RatesError, Result};
use crate::fetch::RateSource;

/// Mock rate source that serves a canned HTML document.
///
/// # Example
///
/// ```rust,ignore
/// use rates::testing::MockRateSource;
///
/// let mock = MockRateSource::new().with_html("<table>...</table>");
/// let html = mock.fetch_table("eng").await?;
/// assert_eq!(mock.calls(), vec!["eng".to_string()]);
/// ```
#[derive(Default)]
pub struct MockRateSource {
    /// Canned document returned by fetch_table
    html: Arc<RwLock<Option<String>>>,
    /// When set, every fetch fails with an upstream error
    fail: Arc<RwLock<bool>>,
    /// Languages requested so far, in call order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockRateSource {
    /// Create a mock that serves an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document served by fetch_table (builder pattern).
    pub fn with_html(self, html: impl Into<String>) -> Self {
        *self.html.write().unwrap() = Some(html.into());
        self
    }

    /// Make every fetch fail with an upstream error (builder pattern).
    pub fn with_error(self) -> Self {
        *self.fail.write().unwrap() = true;
        self
    }

    /// Get the languages that were requested, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Get the number of times fetch_table was called.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Clone for MockRateSource {
    fn clone(&self) -> Self {
        Self {
            html: Arc::clone(&self.html),
            fail: Arc::clone(&self.fail),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl RateSource for MockRateSource {
    async fn fetch_table(&self, lang: &str) -> Result<String> {
        self.calls.write().unwrap().push(lang.to_string());

        if *self.fail.read().unwrap() {
            return Err(RatesError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
            });
        }

        Ok(self.html.read().unwrap().clone().unwrap_or_default())
    }
}
