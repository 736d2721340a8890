//! Field Config Source Port - Interface for loading configurable field sets.
//!
//! Tenants configure extra subscription and compliance fields. The schema
//! can live in memory, on disk, or behind the dashboard's config endpoint.

use async_trait::async_trait;

use crate::domain::fields::{FieldEntity, FieldSchema};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while loading a field schema
#[derive(Debug, thiserror::Error)]
pub enum FieldConfigError {
    #[error("No field configuration for entity: {0}")]
    NotFound(FieldEntity),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse field configuration: {0}")]
    Parse(String),

    #[error("Field configuration service error: {0}")]
    Transport(String),
}

impl FieldConfigError {
    /// True when the source could not be reached, as opposed to
    /// returning bad or missing data.
    pub fn is_upstream(&self) -> bool {
        matches!(self, FieldConfigError::Transport(_))
    }
}

impl From<FieldConfigError> for DomainError {
    fn from(err: FieldConfigError) -> Self {
        let code = match &err {
            FieldConfigError::NotFound(_) => ErrorCode::FieldSchemaNotFound,
            FieldConfigError::Transport(_) => ErrorCode::UpstreamUnavailable,
            FieldConfigError::Io(_) | FieldConfigError::Parse(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for loading field schemas
#[async_trait]
pub trait FieldConfigSource: Send + Sync {
    /// Load the field schema for an entity
    ///
    /// # Errors
    /// Returns `FieldConfigError::NotFound` if no schema is configured
    async fn load_schema(&self, entity: FieldEntity) -> Result<FieldSchema, FieldConfigError>;

    /// Load the schema, treating "not configured" as an empty schema
    async fn load_schema_or_empty(
        &self,
        entity: FieldEntity,
    ) -> Result<FieldSchema, FieldConfigError> {
        match self.load_schema(entity).await {
            Err(FieldConfigError::NotFound(_)) => Ok(FieldSchema::empty(entity)),
            other => other,
        }
    }
}
