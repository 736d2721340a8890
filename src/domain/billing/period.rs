//! Period value object: one billing term.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CalendarDate, ValidationError};

/// One billing term, both ends inclusive.
///
/// `end_date` is `None` only for open-ended (pay-as-you-go) terms.
/// When present it is never before `start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    start_date: CalendarDate,
    end_date: Option<CalendarDate>,
}

#[derive(Deserialize)]
struct RawPeriod {
    start_date: CalendarDate,
    #[serde(default)]
    end_date: Option<CalendarDate>,
}

impl TryFrom<RawPeriod> for Period {
    type Error = ValidationError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        match raw.end_date {
            Some(end) => Period::closed(raw.start_date, end),
            None => Ok(Period::open(raw.start_date)),
        }
    }
}

impl Period {
    /// A bounded period. Fails when `end_date < start_date`.
    pub fn closed(
        start_date: CalendarDate,
        end_date: CalendarDate,
    ) -> Result<Self, ValidationError> {
        if end_date < start_date {
            return Err(ValidationError::invalid_format(
                "end_date",
                format!("{} is before start date {}", end_date, start_date),
            ));
        }
        Ok(Self {
            start_date,
            end_date: Some(end_date),
        })
    }

    /// A period with no computed end.
    pub fn open(start_date: CalendarDate) -> Self {
        Self {
            start_date,
            end_date: None,
        }
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<CalendarDate> {
        self.end_date
    }

    pub fn is_open_ended(&self) -> bool {
        self.end_date.is_none()
    }

    /// Whether `date` falls inside the period. Open periods contain every
    /// date from their start onward.
    pub fn contains(&self, date: &CalendarDate) -> bool {
        *date >= self.start_date && self.end_date.map_or(true, |end| *date <= end)
    }

    /// Inclusive length in days, `None` when open-ended.
    pub fn length_days(&self) -> Option<i64> {
        self.end_date
            .map(|end| self.start_date.days_until(&end) + 1)
    }

    /// True when `other` starts the day after this period ends.
    pub fn is_followed_by(&self, other: &Period) -> bool {
        self.end_date
            .and_then(|end| end.add_days(1))
            .map_or(false, |next| next == other.start_date)
    }
}
