//! Billing configuration

use serde::Deserialize;

use crate::domain::subscription::Currency;

use super::error::ValidationError;

/// Billing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Tenant's local currency (ISO 4217)
    #[serde(default = "default_local_currency")]
    pub local_currency: String,

    /// Upper bound on periods returned by one renewal schedule
    #[serde(default = "default_max_schedule_periods")]
    pub max_schedule_periods: usize,
}

impl BillingConfig {
    /// Parsed local currency
    pub fn currency(&self) -> Result<Currency, ValidationError> {
        Currency::new(&self.local_currency)
            .map_err(|_| ValidationError::InvalidCurrency(self.local_currency.clone()))
    }

    /// Validate billing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.currency()?;
        if !(1..=1000).contains(&self.max_schedule_periods) {
            return Err(ValidationError::InvalidSchedulePeriods);
        }
        Ok(())
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            local_currency: default_local_currency(),
            max_schedule_periods: default_max_schedule_periods(),
        }
    }
}

fn default_local_currency() -> String {
    "USD".to_string()
}

fn default_max_schedule_periods() -> usize {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = BillingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency().unwrap().as_str(), "USD");
        assert_eq!(config.max_schedule_periods, 120);
    }

    #[test]
    fn lowercase_currency_is_normalized() {
        let config = BillingConfig {
            local_currency: "gbp".to_string(),
            ..Default::default()
        };
        assert_eq!(config.currency().unwrap().as_str(), "GBP");
    }

    #[test]
    fn rejects_malformed_currency() {
        let config = BillingConfig {
            local_currency: "dollars".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidCurrency("dollars".to_string()))
        );
    }

    #[test]
    fn rejects_schedule_bounds() {
        for periods in [0, 1001] {
            let config = BillingConfig {
                max_schedule_periods: periods,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidSchedulePeriods));
        }
    }
}
