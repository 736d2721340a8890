//! Email address heuristic.
//!
//! This is a shape check for form input, not RFC 5322 validation: one `@`,
//! no whitespace, and a dotted domain.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::ValidationError;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns true when `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if !EMAIL_SHAPE.is_match(value) {
        return false;
    }
    // The regex guarantees exactly one '@'.
    let domain = value.rsplit('@').next().unwrap_or_default();
    !(domain.starts_with('.') || domain.ends_with('.') || domain.contains(".."))
}

/// Validates an email field, naming `field` in the error.
pub fn validate_email(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if !is_valid_email(value) {
        return Err(ValidationError::invalid_format(
            field,
            format!("'{}' is not a valid email address", value.trim()),
        ));
    }
    Ok(())
}
