// Main entry point for API server

use anyhow::{Context, Result};
use rates::NbsClient;
use server_core::{server::build_app, Config};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,rates=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NBS Exchange Rates API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Outbound client for the relay-fronted NBS page
    let source = NbsClient::new(config.relay_url.clone(), config.upstream_url.clone())
        .context("Failed to create NBS client")?;

    // Build application
    let addr = format!("0.0.0.0:{}", config.port);
    let port = config.port;
    let app = build_app(Arc::new(config), Arc::new(source));

    // Start server
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Exchange rates: http://localhost:{}/api/nbs/rates", port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
