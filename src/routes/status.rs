//! Server status endpoint.
//!
//! Unlike the greeting, this never fails: a hostname lookup error drops the
//! `hostname` field instead of turning the response into a 500.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{RUNNING_STATUS, SERVICE_VERSION};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub requests_processed: u64,
    pub active_requests: u64,
}

/// GET /status - uptime and request counters.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let hostname = match state.host.hostname() {
        Ok(name) => Some(name),
        Err(e) => {
            tracing::warn!(error = %e, "Hostname lookup failed, omitting from status");
            None
        }
    };

    let stats = &state.stats;
    Json(StatusResponse {
        status: RUNNING_STATUS,
        version: SERVICE_VERSION,
        hostname,
        started_at: stats.started_at(),
        uptime_seconds: stats.uptime().as_secs(),
        requests_processed: stats.requests_processed(),
        active_requests: stats.active_requests(),
    })
}
