//! HTTP adapter for billing endpoints.
//!
//! Exposes the billing calculator via REST API:
//! - `POST /api/billing/end-date` - Compute a period end date
//! - `POST /api/billing/next-period` - Roll to the next period
//! - `POST /api/billing/renewals` - Build a renewal schedule

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::billing_routes;
