//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the subscription tracker domain.

mod calendar_date;
mod errors;
mod ids;

pub use calendar_date::CalendarDate;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SubscriptionDraftId;
