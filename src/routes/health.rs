//! Liveness probe for the swarm service's `HEALTHCHECK`.
//!
//! Answers from constants only, so a replica whose hostname lookup is broken
//! still reports healthy while `GET /` fails.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTHY_STATUS;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY_STATUS,
    })
}
