//! Billing cycle calculator.
//!
//! Pure functions deriving period boundaries from a start date and a cycle.
//! Nothing here fails: an input that cannot produce a date yields `None`,
//! which callers treat as "not yet computable".
//!
//! Month overflow clamps to the end of the target month, so
//! 2024-01-31 monthly ends 2024-02-28 (Feb 29 minus one day).

use crate::domain::foundation::CalendarDate;

use super::cycle::{BillingCycle, PeriodRule};
use super::period::Period;

/// Inclusive end date of the period starting on `start`.
///
/// Returns `None` for pay-as-you-go, which has no end date, and when the
/// arithmetic leaves the representable date range.
pub fn compute_end_date(start: CalendarDate, cycle: BillingCycle) -> Option<CalendarDate> {
    match cycle.rule() {
        PeriodRule::CalendarMonths(months) => start.add_months(months)?.add_days(-1),
        PeriodRule::FixedDays(days) => start.add_days(days),
        PeriodRule::OpenEnded => None,
    }
}

/// The period immediately following one that ends on `current_end`.
///
/// The next period starts exactly one day later, so periods never overlap and
/// never leave a gap. For pay-as-you-go the result is open-ended.
pub fn compute_next_period(current_end: CalendarDate, cycle: BillingCycle) -> Option<Period> {
    let next_start = current_end.add_days(1)?;
    period_starting(next_start, cycle)
}

/// The period that begins on `start`.
pub fn period_starting(start: CalendarDate, cycle: BillingCycle) -> Option<Period> {
    if !cycle.has_fixed_term() {
        return Some(Period::open(start));
    }
    let end = compute_end_date(start, cycle)?;
    Period::closed(start, end).ok()
}

/// String-facing [`compute_end_date`].
///
/// Takes an ISO date and a cycle name as they arrive from a form and returns
/// the end date as `YYYY-MM-DD`. A missing, blank or unparseable input gives `None`.
pub fn end_date_for(start: Option<&str>, cycle: Option<&str>) -> Option<String> {
    let start = CalendarDate::parse_lenient(start)?;
    let cycle = BillingCycle::parse_lenient(cycle)?;
    compute_end_date(start, cycle).map(|d| d.to_string())
}

/// String-facing [`compute_next_period`].
pub fn next_period_for(current_end: Option<&str>, cycle: Option<&str>) -> Option<Period> {
    let current_end = CalendarDate::parse_lenient(current_end)?;
    let cycle = BillingCycle::parse_lenient(cycle)?;
    compute_next_period(current_end, cycle)
}
