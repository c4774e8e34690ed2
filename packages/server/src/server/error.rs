//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::server::response::json_response;

/// Errors surfaced to API clients.
///
/// Bodies are fixed strings; whatever caused an upstream failure is logged
/// at the handler and never leaks to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("no route for request")]
    NotFound,

    #[error("invalid or missing API key")]
    Unauthorized,

    #[error("exchange rates unavailable")]
    Upstream,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::NotFound => "Not found",
            ApiError::Unauthorized => "Unauthorized - Invalid or missing API key",
            ApiError::Upstream => "Couldn't fetch exchange rates.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_response(self.status(), &json!({ "error": self.message() }))
    }
}
