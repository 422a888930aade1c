//! Health check endpoint for the dispenser service.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status: "healthy" while the inventory lock is usable.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Total cash value still loaded in the machine, when readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_available: Option<u64>,
}

/// Health check handler. A poisoned inventory lock degrades the status
/// instead of failing the probe.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let total_available = state
        .inventory
        .lock()
        .ok()
        .map(|inventory| inventory.total_value());

    Json(HealthResponse {
        status: if total_available.is_some() {
            "healthy"
        } else {
            "degraded"
        },
        service: "caixa",
        version: env!("CARGO_PKG_VERSION"),
        total_available,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
