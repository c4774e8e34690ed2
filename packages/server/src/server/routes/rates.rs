//! Exchange-rate route.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use rates::{assemble, extract_rows, normalize_row, ExchangeRate};

use crate::server::app::AppState;
use crate::server::auth::api_key_matches;
use crate::server::error::ApiError;
use crate::server::response::json_response;

/// Header selecting the upstream page language
pub const LANG_HEADER: &str = "x-lang";

/// GET /api/nbs/rates
///
/// Checks the shared-secret header, fetches the table rendered for the
/// requested language and returns the prioritized records. Any fetch or
/// pipeline failure collapses to the generic 500 body; the cause only
/// reaches the log.
pub async fn rates_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !api_key_matches(&headers, &state.config.api_key) {
        return ApiError::Unauthorized.into_response();
    }

    let lang = headers
        .get(LANG_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(&state.config.default_lang);

    match fetch_rates(&state, lang).await {
        Ok(records) => json_response(StatusCode::OK, &records),
        Err(error) => {
            tracing::error!(error = %error, "Error fetching exchange rates");
            ApiError::Upstream.into_response()
        }
    }
}

/// Fetch the upstream document and run the extraction pipeline over it.
async fn fetch_rates(state: &AppState, lang: &str) -> rates::Result<Vec<ExchangeRate>> {
    let html = state.source.fetch_table(lang).await?;

    let cells: Vec<Vec<String>> = extract_rows(&html)
        .iter()
        .map(|row| normalize_row(row))
        .collect();

    assemble(&cells, &state.config.priority_currencies)
}

/// Shared fallback for unknown paths and for non-GET methods on the route.
pub async fn not_found_handler() -> Response {
    ApiError::NotFound.into_response()
}
