//! Termination signal handling.
//!
//! The service is usually PID 1 inside a container, where SIGTERM has no
//! default action, so the orchestrator's stop request has to be handled
//! explicitly. The server stops immediately; in-flight connections are not
//! drained.

use axum_server::Handle;

/// Stop the server on SIGTERM or SIGINT.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, stopping server");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, stopping server");
            }
        }

        handle.shutdown();
    });
}
