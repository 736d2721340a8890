//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Billing handlers
    CalculateEndDateHandler, CalculateEndDateQuery, CalculateEndDateResult,
    NextPeriodHandler, NextPeriodQuery, NextPeriodResult,
    RenewalScheduleHandler, RenewalScheduleQuery, RenewalScheduleResult,
    // Subscription handlers
    GetFieldSchemaHandler, GetFieldSchemaQuery, GetFieldSchemaResult,
    RecomputeDraftCommand, RecomputeDraftHandler, RecomputeDraftResult,
};
