//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use catalog_core::enrichment::EnrichmentClient;
use catalog_core::store::ProductStore;
use catalog_products::application::aggregator::Aggregator;
use catalog_test_support::{InMemoryProductStore, product};
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::build_router;
use catalog_api::state::AppState;

/// The demo catalog used across API tests.
pub fn demo_store() -> Arc<InMemoryProductStore> {
    Arc::new(InMemoryProductStore::new(vec![
        product(1, "Widget", "A widget"),
        product(2, "Gadget", "A gadget"),
        product(3, "Gizmo", "A gizmo"),
    ]))
}

/// Build the full app router over `store` and `enrichments`, with the same
/// layers as `main.rs`.
pub fn build_test_app(
    store: Arc<dyn ProductStore>,
    enrichments: Vec<Arc<dyn EnrichmentClient>>,
) -> Router {
    build_router(AppState::new(Aggregator::new(store, enrichments)))
}

/// Response parts captured by `send`.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    /// Body parsed as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// Body as UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
}

/// Send a GET request with extra headers and capture the response.
pub async fn send(app: Router, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Send a GET request and return the status and JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = send(app, uri, &[]).await;
    (response.status, response.json())
}
