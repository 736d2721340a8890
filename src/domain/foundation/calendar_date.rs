//! Calendar-day value object used for every billing boundary.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const ISO_DATE: &str = "%Y-%m-%d";

/// A date with day precision and no time zone.
///
/// Billing periods are computed on calendar days, never on elapsed durations,
/// so month length and leap years come from calendar rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from year, month and day. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps an existing `NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Strict parse.
    ///
    /// Accepts `YYYY-MM-DD` or an RFC 3339 date-time, which is truncated to
    /// its calendar day in UTC.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("date"));
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE) {
            return Ok(Self(date));
        }

        DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| Self(dt.with_timezone(&Utc).date_naive()))
            .map_err(|_| {
                ValidationError::invalid_format("date", format!("'{}' is not YYYY-MM-DD", trimmed))
            })
    }

    /// Lenient parse for values that may still be missing on a form.
    ///
    /// Absent, blank and unparseable inputs all yield `None`.
    pub fn parse_lenient(input: Option<&str>) -> Option<Self> {
        input.and_then(|s| Self::parse(s).ok())
    }

    /// Adds (or subtracts, when negative) whole days.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(Duration::days(days)).map(Self)
    }

    /// Adds calendar months.
    ///
    /// When the target month is shorter, the day is clamped to its last day:
    /// 2024-01-31 + 1 month = 2024-02-29.
    pub fn add_months(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(Self)
    }

    /// Adds calendar years with the same clamping rule as [`add_months`](Self::add_months).
    pub fn add_years(&self, years: u32) -> Option<Self> {
        years.checked_mul(12).and_then(|m| self.add_months(m))
    }

    /// Length of the given month, or `None` outside chrono's range.
    pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = first.checked_add_months(Months::new(1))?;
        u32::try_from(next.signed_duration_since(first).num_days()).ok()
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE))
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
