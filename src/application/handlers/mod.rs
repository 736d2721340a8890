//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `billing` - Period and renewal schedule queries
//! - `subscription` - Draft recompute and field schema lookup

pub mod billing;
pub mod subscription;

pub use billing::{
    CalculateEndDateHandler, CalculateEndDateQuery, CalculateEndDateResult, NextPeriodHandler,
    NextPeriodQuery, NextPeriodResult, RenewalScheduleHandler, RenewalScheduleQuery,
    RenewalScheduleResult,
};
pub use subscription::{
    GetFieldSchemaHandler, GetFieldSchemaQuery, GetFieldSchemaResult, RecomputeDraftCommand,
    RecomputeDraftHandler, RecomputeDraftResult,
};
