//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns `{"status": "ok"}` whenever the process
//! can answer HTTP. Used by Kubernetes, ECS and load balancers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::config::HEALTH_STATUS_OK;

/// Body of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK,
        }
    }
}

/// Health check handler.
#[instrument(name = "health::health")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
