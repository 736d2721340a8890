//! Billing domain module.
//!
//! Derives billing period boundaries from a start date and a billing cycle.
//!
//! # Module Structure
//!
//! - `cycle` - BillingCycle enumeration and parsing
//! - `period` - Period value object (inclusive start/end)
//! - `calculator` - End date and next period computation
//! - `schedule` - Renewal date rolling across successive periods
//! - `errors` - Errors raised by the typed entry points

mod calculator;
mod cycle;
mod errors;
mod period;
mod schedule;

pub use calculator::{
    compute_end_date, compute_next_period, end_date_for, next_period_for, period_starting,
};
pub use cycle::{BillingCycle, UnknownBillingCycle};
pub use errors::BillingError;
pub use period::Period;
pub use schedule::{
    next_renewal_date, period_containing, periods_from, renewal_schedule, BillingPeriods,
};
