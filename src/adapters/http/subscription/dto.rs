//! Request and response DTOs for subscription draft and field endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::subscription::RecomputeDraftResult;
use crate::domain::fields::{FieldDefinition, FieldSchema, FieldType};
use crate::domain::subscription::{DraftChange, DraftIssue, SubscriptionDraft};

/// Request body for `POST /api/subscriptions/draft`.
///
/// An absent draft starts from an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecomputeDraftRequest {
    #[serde(default)]
    pub draft: SubscriptionDraft,
    #[serde(default)]
    pub changes: Vec<DraftChange>,
    #[serde(default)]
    pub as_of: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecomputeDraftResponse {
    pub draft: SubscriptionDraft,
    pub issues: Vec<DraftIssue>,
}

impl From<RecomputeDraftResult> for RecomputeDraftResponse {
    fn from(result: RecomputeDraftResult) -> Self {
        Self {
            draft: result.draft,
            issues: result.issues,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinitionResponse {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub enabled: bool,
}

impl From<FieldDefinition> for FieldDefinitionResponse {
    fn from(def: FieldDefinition) -> Self {
        Self {
            label: def.display_label().to_string(),
            name: def.name,
            field_type: def.field_type,
            required: def.required,
            enabled: def.enabled,
        }
    }
}

/// Response for `GET /api/fields/:entity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchemaResponse {
    pub entity: String,
    pub fields: Vec<FieldDefinitionResponse>,
}

impl From<FieldSchema> for FieldSchemaResponse {
    fn from(schema: FieldSchema) -> Self {
        Self {
            entity: schema.entity.as_str().to_string(),
            fields: schema
                .fields
                .into_iter()
                .map(FieldDefinitionResponse::from)
                .collect(),
        }
    }
}
