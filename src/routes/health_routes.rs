//! Health check endpoints.

use axum::{Json, Router, routing::get};

use crate::models::HealthResponse;

/// Registers health check routes.
pub fn routes() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Simple health check endpoint.
///
/// Always 200 while the process is serving requests.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::HEALTHY)
}
