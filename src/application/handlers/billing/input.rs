//! Parsing of raw billing inputs for the typed entry points.
//!
//! Blank means "not provided". Anything else must parse.

use crate::domain::billing::{BillingCycle, BillingError};
use crate::domain::foundation::CalendarDate;

fn provided(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

pub(super) fn optional_date(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<CalendarDate>, BillingError> {
    match provided(raw) {
        None => Ok(None),
        Some(value) => CalendarDate::parse(value)
            .map(Some)
            .map_err(|e| BillingError::invalid_date(field, e.to_string())),
    }
}

pub(super) fn required_date(field: &str, raw: Option<&str>) -> Result<CalendarDate, BillingError> {
    optional_date(field, raw)?.ok_or_else(|| BillingError::invalid_date(field, "is required"))
}

pub(super) fn optional_cycle(raw: Option<&str>) -> Result<Option<BillingCycle>, BillingError> {
    provided(raw)
        .map(|value| value.parse::<BillingCycle>().map_err(BillingError::from))
        .transpose()
}

pub(super) fn required_cycle(raw: Option<&str>) -> Result<BillingCycle, BillingError> {
    optional_cycle(raw)?.ok_or_else(|| BillingError::unknown_cycle(""))
}
