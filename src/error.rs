//! Errors raised while bringing the service up.
//!
//! Request handling itself cannot fail; everything here happens before or
//! around `axum::serve`.

use std::io;

use thiserror::Error;

/// Failures while binding or running the HTTP server.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("could not bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// Failures while installing the global tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid logging.level '{0}'. Valid values: trace, debug, info, warn, error")]
    InvalidLevel(String),

    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}
