//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`api_router`] mounts them all under `/api`.

pub mod billing;
pub mod error;
pub mod state;
pub mod subscription;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// GET /api/health - Liveness check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Create the complete API router with state applied.
///
/// # Example
///
/// ```ignore
/// let state = AppState::new(Arc::new(InMemoryFieldConfig::new()), usd, 120);
/// let app = api_router(state);
/// ```
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .nest("/billing", billing::billing_routes())
        .nest("/subscriptions", subscription::subscription_routes())
        .nest("/fields", subscription::field_routes());

    Router::new().nest("/api", api).with_state(state)
}
