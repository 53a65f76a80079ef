//! HTTP route definitions and handlers.
//!
//! Two route groups: the greeting at `/` and the health check at `/health`.
//! Anything else falls through to axum's default 404/405 handling.

mod greeting_routes;
mod health_routes;

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the application router with all configured routes.
///
/// Combines the route groups into a single router and wraps it in a
/// request-tracing layer. Request spans and the response event are emitted
/// at INFO so they show up under the default logging level.
pub fn create_router() -> Router {
    Router::new()
        .merge(greeting_routes::routes())
        .merge(health_routes::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
