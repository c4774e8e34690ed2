use axum::http::HeaderMap;

/// Header carrying the shared API secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Check the shared-secret header against the configured key.
///
/// The comparison is an exact string match. A missing header, a value that
/// is not valid UTF-8, or any mismatch all fail the check the same way.
pub fn api_key_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|candidate| candidate == expected)
        .unwrap_or(false)
}
