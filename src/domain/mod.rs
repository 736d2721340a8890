//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (calendar dates, IDs, errors)
//! - `billing` - Billing cycles, periods and renewal date rolling
//! - `fields` - Tenant-configurable field sets
//! - `subscription` - Subscription draft and derived-field reducer
//! - `validation` - Field-level rules such as the email heuristic

pub mod billing;
pub mod fields;
pub mod foundation;
pub mod subscription;
pub mod validation;
