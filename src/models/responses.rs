//! Response bodies served by the HTTP routes.
//!
//! Both bodies are fixed for the lifetime of the process.

use serde::Serialize;

/// Body of `GET /`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub version: &'static str,
}

impl GreetingResponse {
    pub const DEFAULT: GreetingResponse = GreetingResponse {
        message: "Hello from Python Backend!",
        version: "1.0.0",
    };
}

/// Body of `GET /health`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const HEALTHY: HealthResponse = HealthResponse { status: "healthy" };
}
