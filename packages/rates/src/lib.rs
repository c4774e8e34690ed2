//! NBS Exchange-Rate Extraction Library
//!
//! Fetches the National Bank of Serbia middle-rate page through a CORS relay
//! and turns the server-rendered HTML table into structured records. The
//! pipeline runs in three stages, each usable on its own:
//!
//! 1. [`extract_rows`] - select the rate table rows, skipping the header
//! 2. [`normalize_row`] - strip cell markup and split into trimmed values
//! 3. [`assemble()`] - map cells to records and front-load priority currencies
//!
//! # Modules
//!
//! - [`fetch`] - RateSource trait and the relay-backed NBS client
//! - [`extract`] - row selection from raw HTML
//! - [`normalize`] - cell splitting and cleanup
//! - [`mod@assemble`] - record construction and priority ordering
//! - [`types`] - the ExchangeRate record
//! - [`testing`] - mock implementations for testing

pub mod assemble;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use error::{RatesError, Result};
pub use types::ExchangeRate;

// Re-export pipeline stages
pub use assemble::{assemble, MAX_ROWS};
pub use extract::extract_rows;
pub use normalize::normalize_row;

// Re-export the fetch seam
pub use fetch::{NbsClient, RateSource};

// Re-export testing utilities
pub use testing::MockRateSource;
