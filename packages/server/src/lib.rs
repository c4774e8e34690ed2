// NBS Exchange Rates API
//
// This crate provides the JSON API in front of the National Bank of Serbia
// middle-rate page: one authenticated route that fetches the upstream HTML
// through a CORS relay and returns the extracted records.

pub mod config;
pub mod server;

pub use config::*;
