//! JSON response construction.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Every response carries an explicit charset, matching what API clients
/// were built against.
const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Serialize `body` as the response payload with the pinned content type.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)],
        Json(body),
    )
        .into_response()
}
