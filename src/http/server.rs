//! HTTP server startup logic.

use std::net::TcpListener;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server stops. SIGTERM and SIGINT stop it.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr)?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    serve(listener, app, handle).await
}

/// Serve `app` on an already bound listener until `handle` stops the server.
pub async fn serve(listener: TcpListener, app: Router, handle: Handle) -> Result<(), ServerError> {
    listener.set_nonblocking(true)?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_not_wrapped() {
        let mut config = AppConfig::default();
        config.http.host = "not-an-ip".to_string();
        let config_err = config.http.socket_addr().unwrap_err();
        let expected = config_err.to_string();

        let err = ServerError::from(config_err);
        assert_eq!(err.to_string(), expected);
    }
}
