//! Renewal date rolling.
//!
//! Successive periods are chained through [`compute_next_period`], so each
//! one starts the day after the previous one ends, even when month clamping
//! shifts the day of month along the way.
//!
//! Lookups relative to `as_of` jump straight to a period start shortly before
//! it and only walk the last few periods, so their cost does not grow with
//! the distance between the start date and `as_of`.

use crate::domain::foundation::CalendarDate;

use super::calculator::{compute_next_period, period_starting};
use super::cycle::{BillingCycle, PeriodRule};
use super::period::Period;

/// Month lengths repeat every 400 Gregorian years.
const GREGORIAN_CYCLE_MONTHS: i64 = 400 * 12;

/// Iterator over contiguous billing periods.
///
/// Yields a single open period for pay-as-you-go and then stops.
#[derive(Debug, Clone)]
pub struct BillingPeriods {
    next: Option<Period>,
    cycle: BillingCycle,
}

impl Iterator for BillingPeriods {
    type Item = Period;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .end_date()
            .and_then(|end| compute_next_period(end, self.cycle));
        Some(current)
    }
}

/// Periods starting on `start`, in order.
pub fn periods_from(start: CalendarDate, cycle: BillingCycle) -> BillingPeriods {
    BillingPeriods {
        next: period_starting(start, cycle),
        cycle,
    }
}

/// The first `count` periods starting on `start`.
pub fn renewal_schedule(start: CalendarDate, cycle: BillingCycle, count: usize) -> Vec<Period> {
    periods_from(start, cycle).take(count).collect()
}

/// The period containing `as_of`, rolling forward from `start`.
///
/// Returns `None` when `as_of` is before `start`.
pub fn period_containing(
    start: CalendarDate,
    cycle: BillingCycle,
    as_of: CalendarDate,
) -> Option<Period> {
    if as_of < start {
        return None;
    }
    let from = jump_towards(start, cycle, as_of).unwrap_or(start);
    periods_from(from, cycle).find(|p| p.contains(&as_of))
}

/// A period start of the chain beginning at `start` that lies at or before
/// `as_of`, at most a couple of periods earlier than the one containing it.
fn jump_towards(
    start: CalendarDate,
    cycle: BillingCycle,
    as_of: CalendarDate,
) -> Option<CalendarDate> {
    match cycle.rule() {
        PeriodRule::FixedDays(days) => {
            let span = days + 1;
            let skipped = start.days_until(&as_of) / span;
            start.add_days(skipped.checked_mul(span)?)
        }
        PeriodRule::CalendarMonths(months) => {
            let months = i64::from(months);
            let steps = (month_index(as_of) - month_index(start)) / months - 1;
            if steps <= 0 {
                return Some(start);
            }
            nth_month_step(start, months, steps)
        }
        PeriodRule::OpenEnded => Some(start),
    }
}

/// Start of period `steps` in a calendar-month chain.
///
/// Each step adds `months` and clamps the day to the target month, so the
/// day of month only ever shrinks to the shortest month visited.
fn nth_month_step(start: CalendarDate, months: i64, steps: i64) -> Option<CalendarDate> {
    let base = month_index(start);
    let mut day = start.day();

    for step in 1..=steps.min(GREGORIAN_CYCLE_MONTHS) {
        if day <= 28 {
            break;
        }
        let (year, month) = from_month_index(base + step * months)?;
        day = day.min(CalendarDate::days_in_month(year, month)?);
    }

    let (year, month) = from_month_index(base + steps.checked_mul(months)?)?;
    CalendarDate::from_ymd(year, month, day)
}

fn month_index(date: CalendarDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month()) - 1
}

fn from_month_index(index: i64) -> Option<(i32, u32)> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    Some((year, month))
}

/// The date the subscription next renews as seen from `as_of`.
///
/// That is the day after the end of the current period, or `start` itself
/// when the subscription has not begun yet. Pay-as-you-go never renews.
pub fn next_renewal_date(
    start: CalendarDate,
    cycle: BillingCycle,
    as_of: CalendarDate,
) -> Option<CalendarDate> {
    if !cycle.has_fixed_term() {
        return None;
    }
    if as_of < start {
        return Some(start);
    }
    period_containing(start, cycle, as_of)?
        .end_date()?
        .add_days(1)
}
