//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    /// The process is serving but the pricing store is unreachable.
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always answers 200; store trouble shows up as `"degraded"` in the body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Pricing store health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy {
            ServiceStatus::Ok
        } else {
            ServiceStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
