//! Axum router configuration for subscription and field endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{get_field_schema, recompute_draft};

/// Subscription draft routes, mounted at `/api/subscriptions`.
///
/// - `POST /draft` - Recompute a draft after edits
pub fn subscription_routes() -> Router<AppState> {
    Router::new().route("/draft", post(recompute_draft))
}

/// Field configuration routes, mounted at `/api/fields`.
///
/// - `GET /:entity` - Field schema for `subscription` or `compliance`
pub fn field_routes() -> Router<AppState> {
    Router::new().route("/:entity", get(get_field_schema))
}
