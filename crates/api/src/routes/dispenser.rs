//! Withdrawal and inventory routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::AppState;
use caixa_core::dispenser::{DispenserError, DispenserService};

/// Creates the dispenser routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/saque", post(withdraw))
        .route("/cedulas", get(list_bills))
}

/// Request body for a withdrawal.
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    /// Requested amount. Kept as raw JSON so that a missing field or a
    /// wrongly typed value flows through amount validation instead of
    /// surfacing as a deserialization rejection.
    #[serde(default)]
    pub valor: Value,
}

/// POST `/saque` - Withdraw an amount as a bill breakdown.
async fn withdraw(
    State(state): State<AppState>,
    payload: Result<Json<WithdrawRequest>, JsonRejection>,
) -> Response {
    let raw = match payload {
        Ok(Json(request)) => request.valor.as_i64(),
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable withdrawal body");
            None
        }
    };

    let amount = match DispenserService::validate_amount(raw) {
        Ok(amount) => amount,
        Err(e) => return error_response(&e),
    };

    // The lock is held across the whole check-and-decrement sequence.
    let result = match state.inventory.lock() {
        Ok(mut inventory) => DispenserService::withdraw(&mut inventory, amount),
        Err(poisoned) => Err(DispenserError::Internal(format!(
            "inventory lock poisoned: {poisoned}"
        ))),
    };

    match result {
        Ok(allocation) => {
            info!(amount, "Withdrawal dispensed");
            (StatusCode::OK, Json(allocation)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// GET `/cedulas` - Current per-denomination bill counts.
async fn list_bills(State(state): State<AppState>) -> Response {
    match state.inventory.lock() {
        Ok(inventory) => (StatusCode::OK, Json(inventory.clone())).into_response(),
        Err(poisoned) => error_response(&DispenserError::Internal(format!(
            "inventory lock poisoned: {poisoned}"
        ))),
    }
}

/// Maps a dispenser error to its HTTP response and logs it. Internal detail
/// stays in the log; the wire only ever carries the display message.
fn error_response(error: &DispenserError) -> Response {
    if let DispenserError::Internal(detail) = error {
        error!(detail = %detail, "Request failed unexpectedly");
    } else {
        warn!(code = error.error_code(), "Withdrawal rejected");
    }

    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
