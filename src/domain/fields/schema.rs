//! Field definitions and per-entity schemas.
//!
//! Tenants configure extra fields for subscription and compliance records.
//! The schema is fetched at runtime and checked against submitted values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::value::{FieldType, FieldValue};

/// Record kind that carries configurable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldEntity {
    Subscription,
    Compliance,
}

impl FieldEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldEntity::Subscription => "subscription",
            FieldEntity::Compliance => "compliance",
        }
    }
}

impl std::fmt::Display for FieldEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldEntity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "subscription" | "subscriptions" => Ok(FieldEntity::Subscription),
            "compliance" => Ok(FieldEntity::Compliance),
            other => Err(format!("unknown field entity '{}'", other)),
        }
    }
}

/// One configurable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: None,
            field_type,
            required: false,
            enabled: true,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label for display, falling back to the field name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Problem found when checking values against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldIssue {
    UnknownField { field: String },
    DisabledField { field: String },
    TypeMismatch {
        field: String,
        expected: FieldType,
        actual: FieldType,
    },
    MissingRequired { field: String },
}

impl FieldIssue {
    pub fn field(&self) -> &str {
        match self {
            FieldIssue::UnknownField { field }
            | FieldIssue::DisabledField { field }
            | FieldIssue::TypeMismatch { field, .. }
            | FieldIssue::MissingRequired { field } => field,
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldIssue::UnknownField { field } => write!(f, "Field '{}' is not configured", field),
            FieldIssue::DisabledField { field } => write!(f, "Field '{}' is disabled", field),
            FieldIssue::TypeMismatch {
                field,
                expected,
                actual,
            } => write!(f, "Field '{}' expects {}, got {}", field, expected, actual),
            FieldIssue::MissingRequired { field } => write!(f, "Field '{}' is required", field),
        }
    }
}

/// Configured fields for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub entity: FieldEntity,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl FieldSchema {
    pub fn new(entity: FieldEntity, fields: Vec<FieldDefinition>) -> Self {
        Self { entity, fields }
    }

    /// A schema with no custom fields.
    pub fn empty(entity: FieldEntity) -> Self {
        Self::new(entity, Vec::new())
    }

    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn enabled_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|f| f.enabled)
    }

    /// Checks submitted values. Issues come back in field-name order, with
    /// missing required fields after problems with submitted ones.
    pub fn check(&self, values: &BTreeMap<String, FieldValue>) -> Vec<FieldIssue> {
        let mut issues = Vec::new();

        for (name, value) in values {
            match self.get(name) {
                None => issues.push(FieldIssue::UnknownField { field: name.clone() }),
                Some(def) if !def.enabled => {
                    issues.push(FieldIssue::DisabledField { field: name.clone() })
                }
                Some(def) if value.is_blank() => {
                    if def.required {
                        issues.push(FieldIssue::MissingRequired { field: name.clone() });
                    }
                }
                Some(def) if !value.conforms_to(def.field_type) => {
                    issues.push(FieldIssue::TypeMismatch {
                        field: name.clone(),
                        expected: def.field_type,
                        actual: value.field_type(),
                    })
                }
                Some(_) => {}
            }
        }

        for def in self.enabled_fields().filter(|d| d.required) {
            if !values.contains_key(&def.name) {
                issues.push(FieldIssue::MissingRequired {
                    field: def.name.clone(),
                });
            }
        }

        issues
    }
}
