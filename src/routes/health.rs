//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with a small JSON document
//! whenever the process is running. Load balancers switching traffic between
//! blue and green environments use the echoed labels to confirm which release
//! answered.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::app::Variant;
use crate::config::PIPELINE_SERVICE_NAME;
use crate::state::AppState;

/// Value of `status` in every health response
pub const STATUS_OK: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(flatten)]
    pub detail: HealthDetail,
}

/// Variant-specific fields that follow `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HealthDetail {
    Service { service: String },
    Deployment { color: String, version: String },
}

impl HealthResponse {
    pub fn for_state(state: &AppState) -> Self {
        let detail = match state.variant {
            Variant::Pipeline => HealthDetail::Service {
                service: PIPELINE_SERVICE_NAME.to_string(),
            },
            Variant::BlueGreen => HealthDetail::Deployment {
                color: state.config.deployment.color.clone(),
                version: state.config.deployment.version.clone(),
            },
        };

        Self {
            status: STATUS_OK.to_string(),
            detail,
        }
    }
}

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::for_state(&state))
}
