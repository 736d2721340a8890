//! Billing-specific error types.
//!
//! The calculator itself never fails. These errors come from the typed
//! entry points that reject input outright instead of returning an empty result.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UnknownCycle | 400 |
//! | InvalidDate | 400 |
//! | ScheduleTooLong | 400 |
//! | OutOfRange | 400 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::cycle::{BillingCycle, UnknownBillingCycle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// Cycle string is not one of the enumerated values.
    UnknownCycle(String),

    /// Date input could not be parsed.
    InvalidDate { field: String, reason: String },

    /// Requested schedule length is outside `1..=max`.
    ScheduleTooLong { requested: usize, max: usize },

    /// Arithmetic left the representable calendar.
    OutOfRange,
}

impl BillingError {
    pub fn unknown_cycle(value: impl Into<String>) -> Self {
        BillingError::UnknownCycle(value.into())
    }

    pub fn invalid_date(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BillingError::InvalidDate {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn schedule_too_long(requested: usize, max: usize) -> Self {
        BillingError::ScheduleTooLong { requested, max }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::UnknownCycle(_) => ErrorCode::UnknownBillingCycle,
            BillingError::InvalidDate { .. } => ErrorCode::InvalidFormat,
            BillingError::ScheduleTooLong { .. } => ErrorCode::OutOfRange,
            BillingError::OutOfRange => ErrorCode::OutOfRange,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BillingError::UnknownCycle(value) => {
                let known: Vec<&str> = BillingCycle::ALL.iter().map(BillingCycle::as_str).collect();
                format!(
                    "Unknown billing cycle '{}'; expected one of {}",
                    value,
                    known.join(", ")
                )
            }
            BillingError::InvalidDate { field, reason } => {
                format!("Invalid date for '{}': {}", field, reason)
            }
            BillingError::ScheduleTooLong { requested, max } => {
                format!("Schedule length must be between 1 and {}, got {}", max, requested)
            }
            BillingError::OutOfRange => "Date falls outside the supported calendar".to_string(),
        }
    }
}

impl std::fmt::Display for BillingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BillingError {}

impl From<UnknownBillingCycle> for BillingError {
    fn from(err: UnknownBillingCycle) -> Self {
        BillingError::UnknownCycle(err.0)
    }
}

impl From<ValidationError> for BillingError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        BillingError::InvalidDate {
            field,
            reason: err.to_string(),
        }
    }
}

impl From<BillingError> for DomainError {
    fn from(err: BillingError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
