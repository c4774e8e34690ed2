//! Typed errors for the rates library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure instead of string-inspecting it.

use thiserror::Error;

/// Errors that can occur while fetching or assembling the rate table.
#[derive(Debug, Error)]
pub enum RatesError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Connection timeout
    #[error("timeout fetching {url}")]
    Timeout { url: String },

    /// Upstream answered with a non-success status
    #[error("upstream returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// Row does not carry enough cells for positional mapping
    #[error("row {index} has {found} cells, expected {expected}")]
    MalformedRow {
        index: usize,
        found: usize,
        expected: usize,
    },
}

/// Result type alias for rates operations.
pub type Result<T> = std::result::Result<T, RatesError>;
