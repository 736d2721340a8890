//! CalculateEndDateHandler - Query handler for the period beginning on a start date.

use crate::domain::billing::{period_starting, BillingCycle, BillingError, Period};

use super::input::{optional_cycle, optional_date};

/// Query for the period that begins on `start_date`.
///
/// Both inputs are raw form values. Absent or blank inputs make the
/// result `None`; present but malformed inputs are rejected.
#[derive(Debug, Clone, Default)]
pub struct CalculateEndDateQuery {
    pub start_date: Option<String>,
    pub billing_cycle: Option<String>,
}

/// The period, plus the cycle it was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateEndDateResult {
    pub billing_cycle: BillingCycle,
    pub period: Period,
}

/// Handler computing a billing period's end date.
#[derive(Debug, Clone, Default)]
pub struct CalculateEndDateHandler;

impl CalculateEndDateHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: CalculateEndDateQuery,
    ) -> Result<Option<CalculateEndDateResult>, BillingError> {
        let start = optional_date("start_date", query.start_date.as_deref())?;
        let cycle = optional_cycle(query.billing_cycle.as_deref())?;

        let (start, cycle) = match start.zip(cycle) {
            Some(pair) => pair,
            None => return Ok(None),
        };

        let period = period_starting(start, cycle).ok_or(BillingError::OutOfRange)?;
        tracing::debug!(
            start = %start,
            cycle = %cycle,
            end = ?period.end_date(),
            "Computed end date"
        );

        Ok(Some(CalculateEndDateResult {
            billing_cycle: cycle,
            period,
        }))
    }
}
