//! HTTP handlers for billing endpoints.
//!
//! These handlers connect Axum routes to the billing query handlers.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::billing::{
    CalculateEndDateQuery, NextPeriodQuery, RenewalScheduleQuery,
};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{
    EndDateRequest, EndDateResponse, NextPeriodRequest, NextPeriodResponse, PeriodResponse,
    RenewalScheduleRequest, RenewalScheduleResponse,
};

/// POST /api/billing/end-date - End date of the period beginning on a start date
pub async fn calculate_end_date(
    State(state): State<AppState>,
    Json(request): Json<EndDateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.calculate_end_date_handler();
    let query = CalculateEndDateQuery {
        start_date: request.start_date.clone(),
        billing_cycle: request.billing_cycle.clone(),
    };

    let result = handler.handle(query)?;

    Ok(Json(EndDateResponse::from_result(result, request)))
}

/// POST /api/billing/next-period - Period following the current one
pub async fn next_period(
    State(state): State<AppState>,
    Json(request): Json<NextPeriodRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.next_period_handler();
    let query = NextPeriodQuery {
        current_end_date: request.current_end_date,
        billing_cycle: request.billing_cycle,
    };

    let result = handler.handle(query)?;

    Ok(Json(NextPeriodResponse {
        period: result.map(PeriodResponse::from),
    }))
}

/// POST /api/billing/renewals - Renewal schedule from a start date
pub async fn renewal_schedule(
    State(state): State<AppState>,
    Json(request): Json<RenewalScheduleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.renewal_schedule_handler();
    let query = RenewalScheduleQuery {
        start_date: request.start_date,
        billing_cycle: request.billing_cycle,
        count: request.count,
        as_of: request.as_of,
    };

    let result = handler.handle(query)?;

    Ok(Json(RenewalScheduleResponse::from(result)))
}
