//! Billing cycle definitions.
//!
//! The recurrence interval governing how often a subscription renews.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Raised when a cycle string is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown billing cycle: '{0}'")]
pub struct UnknownBillingCycle(pub String);

/// Subscription billing cycle.
///
/// Determines the period-length rule applied by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum BillingCycle {
    /// One calendar month per period.
    Monthly,
    /// Three calendar months per period.
    Quarterly,
    /// Twelve calendar months per period.
    Yearly,
    /// Seven days per period.
    Weekly,
    /// Fixed 31-day trial window (start day plus 30).
    Trial,
    /// Usage-billed, no fixed term and therefore no end date.
    PayAsYouGo,
}

/// How a cycle turns a start date into an end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PeriodRule {
    /// Add `n` calendar months, then step back one day.
    CalendarMonths(u32),
    /// Inclusive end is `start + n` days.
    FixedDays(i64),
    /// The period never closes.
    OpenEnded,
}

impl BillingCycle {
    /// Every cycle, in display order.
    pub const ALL: [BillingCycle; 6] = [
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::Yearly,
        BillingCycle::Weekly,
        BillingCycle::Trial,
        BillingCycle::PayAsYouGo,
    ];

    /// Wire name (`monthly`, `pay-as-you-go`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Yearly => "yearly",
            BillingCycle::Weekly => "weekly",
            BillingCycle::Trial => "trial",
            BillingCycle::PayAsYouGo => "pay-as-you-go",
        }
    }

    /// Returns false only for cycles without a computable end date.
    pub fn has_fixed_term(&self) -> bool {
        !matches!(self, BillingCycle::PayAsYouGo)
    }

    pub(crate) fn rule(&self) -> PeriodRule {
        match self {
            BillingCycle::Monthly => PeriodRule::CalendarMonths(1),
            BillingCycle::Quarterly => PeriodRule::CalendarMonths(3),
            BillingCycle::Yearly => PeriodRule::CalendarMonths(12),
            BillingCycle::Weekly => PeriodRule::FixedDays(6),
            BillingCycle::Trial => PeriodRule::FixedDays(30),
            BillingCycle::PayAsYouGo => PeriodRule::OpenEnded,
        }
    }

    /// Lenient parse for form input: blank, absent or unknown gives `None`.
    pub fn parse_lenient(input: Option<&str>) -> Option<Self> {
        input.and_then(|s| s.parse().ok())
    }
}

impl FromStr for BillingCycle {
    type Err = UnknownBillingCycle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "quarterly" => Ok(BillingCycle::Quarterly),
            "yearly" | "annual" | "annually" => Ok(BillingCycle::Yearly),
            "weekly" => Ok(BillingCycle::Weekly),
            "trial" => Ok(BillingCycle::Trial),
            "pay-as-you-go" | "pay_as_you_go" | "payg" => Ok(BillingCycle::PayAsYouGo),
            _ => Err(UnknownBillingCycle(s.to_string())),
        }
    }
}

impl TryFrom<String> for BillingCycle {
    type Error = UnknownBillingCycle;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
