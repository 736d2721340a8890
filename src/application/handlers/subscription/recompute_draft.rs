//! RecomputeDraftHandler - Command handler for editing a subscription draft.

use std::sync::Arc;

use crate::domain::fields::FieldEntity;
use crate::domain::foundation::CalendarDate;
use crate::domain::subscription::{
    Currency, DraftChange, DraftIssue, RecomputeContext, SubscriptionDraft,
};
use crate::ports::{FieldConfigError, FieldConfigSource};

/// Command to apply form edits to a draft.
#[derive(Debug, Clone, Default)]
pub struct RecomputeDraftCommand {
    pub draft: SubscriptionDraft,
    pub changes: Vec<DraftChange>,
    /// Reference date for `next_renewal`. Defaults to today.
    pub as_of: Option<CalendarDate>,
}

/// Result of a successful recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct RecomputeDraftResult {
    pub draft: SubscriptionDraft,
    /// Problems that block saving. Empty when the draft is complete.
    pub issues: Vec<DraftIssue>,
}

/// Handler that folds changes through the draft reducer.
///
/// The subscription field schema is loaded on every call so that
/// tenant edits to the configuration apply immediately. Raw custom-field
/// text is typed against that schema first; text that does not fit its
/// field is reported and not applied.
pub struct RecomputeDraftHandler {
    field_config: Arc<dyn FieldConfigSource>,
    local_currency: Currency,
}

impl RecomputeDraftHandler {
    pub fn new(field_config: Arc<dyn FieldConfigSource>, local_currency: Currency) -> Self {
        Self {
            field_config,
            local_currency,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecomputeDraftCommand,
    ) -> Result<RecomputeDraftResult, FieldConfigError> {
        let schema = self
            .field_config
            .load_schema_or_empty(FieldEntity::Subscription)
            .await?;

        let ctx = RecomputeContext {
            as_of: cmd.as_of.unwrap_or_else(CalendarDate::today),
            local_currency: self.local_currency.clone(),
        };

        let change_count = cmd.changes.len();
        let mut issues: Vec<DraftIssue> = Vec::new();
        let changes: Vec<DraftChange> = cmd
            .changes
            .into_iter()
            .filter_map(|change| match change.typed_against(&schema) {
                Ok(change) => Some(change),
                Err(err) => {
                    issues.push(err.into());
                    None
                }
            })
            .collect();

        let draft = cmd.draft.apply_all(changes, &ctx);
        let checked: Vec<DraftIssue> = draft
            .validate(&schema, &ctx)
            .into_iter()
            .filter(|issue| !issues.iter().any(|rejected| rejected.field == issue.field))
            .collect();
        issues.extend(checked);

        tracing::debug!(
            draft_id = %draft.id,
            changes = change_count,
            issues = issues.len(),
            "Recomputed subscription draft"
        );

        Ok(RecomputeDraftResult { draft, issues })
    }
}
