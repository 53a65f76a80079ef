//! Greeting endpoint.

use axum::{Json, Router, routing::get};

use crate::models::GreetingResponse;

/// Registers the greeting route.
pub fn routes() -> Router {
    Router::new().route("/", get(greeting))
}

/// Returns the service greeting and API version.
async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse::DEFAULT)
}
