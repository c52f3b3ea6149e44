//! Shared test harness: builds the application router with mock upstreams.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;

use server_core::kernel::{MockCompletion, MockPaymentGateway, ServerDeps};
use server_core::server::build_app;

/// Build the full application router on top of the given mocks.
///
/// Callers keep their own Arc to each mock so they can assert on the
/// recorded calls after driving the router.
pub fn test_app(completion: Arc<MockCompletion>, payments: Arc<MockPaymentGateway>) -> Router {
    let deps = Arc::new(ServerDeps::new(completion, payments));
    build_app(deps)
}

/// POST request with a JSON body.
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

/// POST request with no body.
pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

/// GET request.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}
