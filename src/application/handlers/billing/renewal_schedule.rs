//! RenewalScheduleHandler - Query handler for upcoming billing periods.

use crate::domain::billing::{
    next_renewal_date, period_containing, renewal_schedule, BillingError, Period,
};
use crate::domain::foundation::CalendarDate;

use super::input::{optional_date, required_cycle, required_date};

/// Query for the first `count` periods of a subscription.
#[derive(Debug, Clone)]
pub struct RenewalScheduleQuery {
    pub start_date: Option<String>,
    pub billing_cycle: Option<String>,
    pub count: usize,
    /// Reference date for `current` and `next_renewal`. Defaults to today.
    pub as_of: Option<String>,
}

/// Result of a successful schedule query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalScheduleResult {
    pub periods: Vec<Period>,
    /// The period containing `as_of`, if the subscription has started.
    pub current: Option<Period>,
    pub next_renewal: Option<CalendarDate>,
}

/// Handler for rolling renewal dates forward.
///
/// Pay-as-you-go yields a single open-ended period and no renewal date.
#[derive(Debug, Clone)]
pub struct RenewalScheduleHandler {
    max_periods: usize,
}

impl RenewalScheduleHandler {
    pub fn new(max_periods: usize) -> Self {
        Self { max_periods }
    }

    pub fn handle(
        &self,
        query: RenewalScheduleQuery,
    ) -> Result<RenewalScheduleResult, BillingError> {
        if query.count == 0 || query.count > self.max_periods {
            return Err(BillingError::schedule_too_long(query.count, self.max_periods));
        }

        let start = required_date("start_date", query.start_date.as_deref())?;
        let cycle = required_cycle(query.billing_cycle.as_deref())?;
        let as_of =
            optional_date("as_of", query.as_of.as_deref())?.unwrap_or_else(CalendarDate::today);

        let periods = renewal_schedule(start, cycle, query.count);
        if periods.is_empty() {
            return Err(BillingError::OutOfRange);
        }

        let current = period_containing(start, cycle, as_of);
        let next_renewal = next_renewal_date(start, cycle, as_of);

        tracing::debug!(
            start = %start,
            cycle = %cycle,
            periods = periods.len(),
            "Built renewal schedule"
        );

        Ok(RenewalScheduleResult {
            periods,
            current,
            next_renewal,
        })
    }
}
