//! NextPeriodHandler - Query handler for the period after the current one.

use crate::domain::billing::{compute_next_period, BillingError, Period};

use super::input::{optional_cycle, optional_date};

/// Query for the period following one that ends on `current_end_date`.
#[derive(Debug, Clone, Default)]
pub struct NextPeriodQuery {
    pub current_end_date: Option<String>,
    pub billing_cycle: Option<String>,
}

pub type NextPeriodResult = Option<Period>;

/// Handler rolling a period forward by one cycle.
#[derive(Debug, Clone, Default)]
pub struct NextPeriodHandler;

impl NextPeriodHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: NextPeriodQuery) -> Result<NextPeriodResult, BillingError> {
        let current_end = optional_date("current_end_date", query.current_end_date.as_deref())?;
        let cycle = optional_cycle(query.billing_cycle.as_deref())?;

        match current_end.zip(cycle) {
            None => Ok(None),
            Some((end, cycle)) => compute_next_period(end, cycle)
                .map(Some)
                .ok_or(BillingError::OutOfRange),
        }
    }
}
