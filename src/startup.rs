//! Application startup and server initialization.
//!
//! This module binds the listener, builds the router and drives the server
//! until a shutdown signal arrives.

use std::future::Future;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::config::ConfigV1;
use crate::error::StartupError;
use crate::routes;

/// Initializes and runs the application server.
///
/// Binds to the address specified in the configuration and serves requests
/// until SIGINT or SIGTERM, then lets in-flight requests finish.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution.
pub async fn run(config: &ConfigV1) -> Result<(), StartupError> {
    let addr = config.bind_address();

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Starting server on {}", addr);

    serve(listener, shutdown_signal()).await?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Serves the application on an already-bound listener until `shutdown`
/// resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes::create_router();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install SIGINT handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            info!("received SIGTERM, starting graceful shutdown");
        }
    }
}
