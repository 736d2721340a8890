//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use crate::application::handlers::billing::{
    CalculateEndDateHandler, NextPeriodHandler, RenewalScheduleHandler,
};
use crate::application::handlers::subscription::{GetFieldSchemaHandler, RecomputeDraftHandler};
use crate::domain::subscription::Currency;
use crate::ports::FieldConfigSource;

/// Shared application state containing all dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub field_config: Arc<dyn FieldConfigSource>,
    pub local_currency: Currency,
    pub max_schedule_periods: usize,
}

impl AppState {
    pub fn new(
        field_config: Arc<dyn FieldConfigSource>,
        local_currency: Currency,
        max_schedule_periods: usize,
    ) -> Self {
        Self {
            field_config,
            local_currency,
            max_schedule_periods,
        }
    }

    pub fn calculate_end_date_handler(&self) -> CalculateEndDateHandler {
        CalculateEndDateHandler::new()
    }

    pub fn next_period_handler(&self) -> NextPeriodHandler {
        NextPeriodHandler::new()
    }

    pub fn renewal_schedule_handler(&self) -> RenewalScheduleHandler {
        RenewalScheduleHandler::new(self.max_schedule_periods)
    }

    pub fn recompute_draft_handler(&self) -> RecomputeDraftHandler {
        RecomputeDraftHandler::new(self.field_config.clone(), self.local_currency.clone())
    }

    pub fn field_schema_handler(&self) -> GetFieldSchemaHandler {
        GetFieldSchemaHandler::new(self.field_config.clone())
    }
}
