//! Request and response DTOs for billing endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::billing::{CalculateEndDateResult, RenewalScheduleResult};
use crate::domain::billing::Period;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /api/billing/end-date`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndDateRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub billing_cycle: Option<String>,
}

/// Request body for `POST /api/billing/next-period`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NextPeriodRequest {
    #[serde(default)]
    pub current_end_date: Option<String>,
    #[serde(default)]
    pub billing_cycle: Option<String>,
}

/// Request body for `POST /api/billing/renewals`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenewalScheduleRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub billing_cycle: Option<String>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub as_of: Option<String>,
}

fn default_count() -> usize {
    12
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A billing period as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResponse {
    pub start_date: String,
    /// `null` for pay-as-you-go.
    pub end_date: Option<String>,
    pub length_days: Option<i64>,
}

impl From<Period> for PeriodResponse {
    fn from(period: Period) -> Self {
        Self {
            start_date: period.start_date().to_string(),
            end_date: period.end_date().map(|d| d.to_string()),
            length_days: period.length_days(),
        }
    }
}

/// Response for `POST /api/billing/end-date`.
///
/// Inputs are echoed normalized when a period was computed, raw otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndDateResponse {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub billing_cycle: Option<String>,
}

impl EndDateResponse {
    pub fn from_result(result: Option<CalculateEndDateResult>, request: EndDateRequest) -> Self {
        match result {
            Some(r) => Self {
                start_date: Some(r.period.start_date().to_string()),
                end_date: r.period.end_date().map(|d| d.to_string()),
                billing_cycle: Some(r.billing_cycle.as_str().to_string()),
            },
            None => Self {
                start_date: request.start_date,
                end_date: None,
                billing_cycle: request.billing_cycle,
            },
        }
    }
}

/// Response for `POST /api/billing/next-period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextPeriodResponse {
    pub period: Option<PeriodResponse>,
}

/// Response for `POST /api/billing/renewals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalScheduleResponse {
    pub periods: Vec<PeriodResponse>,
    pub current_period: Option<PeriodResponse>,
    pub next_renewal: Option<String>,
}

impl From<RenewalScheduleResult> for RenewalScheduleResponse {
    fn from(result: RenewalScheduleResult) -> Self {
        Self {
            periods: result.periods.into_iter().map(PeriodResponse::from).collect(),
            current_period: result.current.map(PeriodResponse::from),
            next_renewal: result.next_renewal.map(|d| d.to_string()),
        }
    }
}
