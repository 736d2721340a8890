//! Axum router configuration for billing endpoints.

use axum::{routing::post, Router};

use super::super::state::AppState;
use super::handlers::{calculate_end_date, next_period, renewal_schedule};

/// Create the billing API router.
///
/// # Routes
///
/// - `POST /end-date` - End date for a start date and cycle
/// - `POST /next-period` - Period after the current one
/// - `POST /renewals` - Renewal schedule
pub fn billing_routes() -> Router<AppState> {
    Router::new()
        .route("/end-date", post(calculate_end_date))
        .route("/next-period", post(next_period))
        .route("/renewals", post(renewal_schedule))
}
