//! Application setup and server configuration.

use std::sync::Arc;

use axum::{routing::get, Router};
use rates::RateSource;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::routes::{not_found_handler, rates_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn RateSource>,
}

/// Build the Axum application router
///
/// Non-GET methods on the rate route answer with the same 404 as unknown
/// paths, so the method fallback and the router fallback share a handler.
pub fn build_app(config: Arc<Config>, source: Arc<dyn RateSource>) -> Router {
    let state = AppState { config, source };

    Router::new()
        .route(
            "/api/nbs/rates",
            get(rates_handler).fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
