//! Billing handlers.
//!
//! Query handlers over the billing calculator. Raw form values are parsed
//! strictly here; the lenient string API lives in the domain.
//!
//! ## Queries
//! - Calculate the end date of the period beginning on a start date
//! - Roll to the next period
//! - Build a renewal schedule

mod calculate_end_date;
mod input;
mod next_period;
mod renewal_schedule;

pub use calculate_end_date::{
    CalculateEndDateHandler, CalculateEndDateQuery, CalculateEndDateResult,
};
pub use next_period::{NextPeriodHandler, NextPeriodQuery, NextPeriodResult};
pub use renewal_schedule::{RenewalScheduleHandler, RenewalScheduleQuery, RenewalScheduleResult};
