//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use warming_core::record::TemperatureRecord;
use warming_core::source::RecordSource;
use warming_test_support::{FailingRecordSource, StaticRecordSource};

use warming_api::routes;
use warming_api::state::AppState;

/// Build the full app router after loading from `source`, exactly as
/// `main.rs` does (minus middleware).
pub async fn build_app_from(source: &dyn RecordSource) -> Router {
    let app_state = AppState::load(source).await;
    routes::router().with_state(app_state)
}

/// Build the app over a fixed record set. Returns the state too so tests can
/// issue several requests against the same narrative.
pub async fn build_test_app(records: Vec<TemperatureRecord>) -> (Router, AppState) {
    let app_state = AppState::load(&StaticRecordSource(records)).await;
    (routes::router().with_state(app_state.clone()), app_state)
}

/// Build the app after a failed load.
pub async fn build_failed_app() -> Router {
    build_app_from(&FailingRecordSource).await
}

/// Send a POST request with no body and return the JSON response.
pub async fn post_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the JSON response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, text) = get_text(app, uri).await;
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    (status, json)
}

/// Send a GET request and return the body as text.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}
