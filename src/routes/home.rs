//! Greeting handler for the root path.
//!
//! Reports which replica answered: the hostname is looked up on every request
//! so that responses behind a load balancer identify the serving container.

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use tracing::instrument;

use crate::config::{GREETING_MESSAGE, SERVICE_VERSION};
use crate::error::AppError;
use crate::middleware::RequestId;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
    pub hostname: String,
    pub version: &'static str,
}

/// GET / - greeting with the serving host's name and the service version.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<Greeting>, AppError> {
    let hostname = state.host.hostname().map_err(|e| {
        tracing::warn!(request_id = %request_id.0, error = %e, "Hostname lookup failed");
        AppError::Hostname(e)
    })?;
    tracing::debug!(%hostname, "Resolved hostname");

    Ok(Json(Greeting {
        message: GREETING_MESSAGE,
        hostname,
        version: SERVICE_VERSION,
    }))
}
