//! Integration tests for the exchange-rate API surface.
//!
//! Requests are driven through the full router with a mock rate source, so
//! routing, authentication, the pipeline and the response contract are all
//! exercised together.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rates::MockRateSource;
use server_core::{server::build_app, Config};
use tower::ServiceExt;

const API_KEY: &str = "test-api-key";

fn test_config() -> Config {
    Config {
        port: 3000,
        api_key: API_KEY.to_string(),
        upstream_url: "https://upstream.test/rates".to_string(),
        relay_url: "https://relay.test/".to_string(),
        default_lang: "eng".to_string(),
        priority_currencies: vec!["EUR".to_string(), "USD".to_string(), "CHF".to_string()],
    }
}

fn test_app(source: MockRateSource) -> Router {
    build_app(Arc::new(test_config()), Arc::new(source))
}

/// Rate table with EUR listed ahead of USD, the way the bank orders its page.
fn rates_page() -> String {
    r#"<html><body>
    <table class="indexsrednjiKursListaTable">
        <tr><th>Currency</th><th>Code</th><th>Country</th><th>Unit</th><th>Middle rate</th></tr>
        <tr><td tabindex="0">AUD</td><td tabindex="0">036</td><td tabindex="0">Australia</td><td tabindex="0">1</td><td tabindex="0">69.1407</td></tr>
        <tr><td tabindex="0">CHF</td><td tabindex="0">756</td><td tabindex="0">Switzerland</td><td tabindex="0">1</td><td tabindex="0">121.0483</td></tr>
        <tr><td tabindex="0">EUR</td><td tabindex="0">978</td><td tabindex="0">Euro zone</td><td tabindex="0">1</td><td tabindex="0">117.1737</td></tr>
        <tr><td tabindex="0">JPY</td><td tabindex="0">392</td><td tabindex="0">Japan</td><td tabindex="0">100</td><td tabindex="0">71.2244</td></tr>
        <tr><td tabindex="0">USD</td><td tabindex="0">840</td><td tabindex="0">United States</td><td tabindex="0">1</td><td tabindex="0">106.2651</td></tr>
    </table>
    </body></html>"#
        .to_string()
}

fn rates_request(key: Option<&str>, lang: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri("/api/nbs/rates");
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    if let Some(lang) = lang {
        builder = builder.header("x-lang", lang);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn returns_rates_with_priority_currencies_first() {
    let app = test_app(MockRateSource::new().with_html(rates_page()));

    let response = app
        .oneshot(rates_request(Some(API_KEY), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();

    let labels: Vec<&str> = records
        .iter()
        .map(|record| record["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["CHF", "EUR", "USD", "AUD", "JPY"]);

    assert_eq!(
        records[0],
        serde_json::json!({
            "label": "CHF",
            "code": "756",
            "country": "Switzerland",
            "unit": "1",
            "rate": "121.0483",
        })
    );
}

#[tokio::test]
async fn missing_api_key_is_unauthorized() {
    let app = test_app(MockRateSource::new().with_html(rates_page()));

    let response = app.oneshot(rates_request(None, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        &body[..],
        br#"{"error":"Unauthorized - Invalid or missing API key"}"#
    );
}

#[tokio::test]
async fn wrong_api_key_is_unauthorized() {
    let source = MockRateSource::new().with_html(rates_page());
    let app = test_app(source.clone());

    let response = app
        .oneshot(rates_request(Some("not-the-key"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // Rejected before any upstream traffic
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn post_to_rates_route_is_not_found() {
    let app = test_app(MockRateSource::new().with_html(rates_page()));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/nbs/rates")
                .header("x-api-key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"error":"Not found"}"#);
}

#[tokio::test]
async fn post_without_key_is_still_not_found() {
    // Routing is decided before authentication is consulted.
    let app = test_app(MockRateSource::new());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/nbs/rates")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = test_app(MockRateSource::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nbs/other")
                .header("x-api-key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );
}

#[tokio::test]
async fn upstream_failure_returns_generic_error() {
    let app = test_app(MockRateSource::new().with_error());

    let response = app
        .oneshot(rates_request(Some(API_KEY), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"error":"Couldn't fetch exchange rates."}"#);
}

#[tokio::test]
async fn short_row_returns_generic_error() {
    let page = r#"<table class="indexsrednjiKursListaTable">
        <tr><th>Currency</th></tr>
        <tr><td tabindex="0">EUR</td><td tabindex="0">978</td></tr>
    </table>"#;
    let app = test_app(MockRateSource::new().with_html(page));

    let response = app
        .oneshot(rates_request(Some(API_KEY), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"error":"Couldn't fetch exchange rates."}"#);
}

#[tokio::test]
async fn missing_table_yields_empty_array() {
    let app = test_app(MockRateSource::new().with_html("<html><body></body></html>"));

    let response = app
        .oneshot(rates_request(Some(API_KEY), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn forwards_lang_header_to_source() {
    let source = MockRateSource::new().with_html(rates_page());
    let app = test_app(source.clone());

    let response = app
        .oneshot(rates_request(Some(API_KEY), Some("lat")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source.calls(), vec!["lat".to_string()]);
}

#[tokio::test]
async fn defaults_lang_when_header_absent() {
    let source = MockRateSource::new().with_html(rates_page());
    let app = test_app(source.clone());

    app.oneshot(rates_request(Some(API_KEY), None))
        .await
        .unwrap();

    assert_eq!(source.calls(), vec!["eng".to_string()]);
}
