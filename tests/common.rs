#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, Response};
use hello_backend::routes::create_router;
use serde_json::Value;

pub fn build_app() -> Router {
    create_router()
}

pub fn request(path: &str, method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

pub fn content_type(response: &Response<Body>) -> String {
    response
        .headers()
        .get("Content-Type")
        .expect("Content-Type header missing")
        .to_str()
        .expect("Content-Type header not valid UTF-8")
        .to_string()
}
