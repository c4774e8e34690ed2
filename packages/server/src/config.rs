use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub upstream_url: String,
    pub relay_url: String,
    pub default_lang: String,
    pub priority_currencies: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            api_key: env::var("API_KEY")
                .context("API_KEY must be set")?,
            upstream_url: env::var("NBS_EXCHANGE_RATE_URL").unwrap_or_else(|_| {
                "https://www.nbs.rs/kursnaListaModul/srednjiKurs.faces".to_string()
            }),
            relay_url: env::var("CORS_PROXY_URL")
                .unwrap_or_else(|_| "https://cors.hypetech.xyz/".to_string()),
            default_lang: env::var("DEFAULT_LANG").unwrap_or_else(|_| "eng".to_string()),
            priority_currencies: env::var("PRIORITY_CURRENCIES")
                .unwrap_or_else(|_| "EUR,USD,CHF".to_string())
                .split(',')
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect(),
        })
    }
}
