//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for withdrawals and inventory queries
//! - The shared application state wrapping the bill inventory

pub mod routes;

use std::sync::{Arc, Mutex};

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use caixa_core::dispenser::Inventory;

/// Application state shared across handlers.
///
/// The inventory mutex is the critical section guard for withdrawals: the
/// handler holds it across the whole check-and-decrement sequence so two
/// concurrent requests can never both pass the sufficiency check against the
/// same stale counts. The guarded region is a short pure computation with no
/// `.await` inside, hence a `std::sync::Mutex` rather than tokio's.
#[derive(Clone)]
pub struct AppState {
    /// Bill inventory, seeded once at startup.
    pub inventory: Arc<Mutex<Inventory>>,
}

impl AppState {
    /// Creates state around an initial inventory.
    #[must_use]
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(Mutex::new(inventory)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
