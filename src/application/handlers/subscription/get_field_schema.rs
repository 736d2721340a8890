//! GetFieldSchemaHandler - Query handler for an entity's configured fields.

use std::sync::Arc;

use crate::domain::fields::{FieldEntity, FieldSchema};
use crate::ports::{FieldConfigError, FieldConfigSource};

#[derive(Debug, Clone, Copy)]
pub struct GetFieldSchemaQuery {
    pub entity: FieldEntity,
}

pub type GetFieldSchemaResult = FieldSchema;

pub struct GetFieldSchemaHandler {
    field_config: Arc<dyn FieldConfigSource>,
}

impl GetFieldSchemaHandler {
    pub fn new(field_config: Arc<dyn FieldConfigSource>) -> Self {
        Self { field_config }
    }

    /// Returns `FieldConfigError::NotFound` when the entity has no configuration.
    pub async fn handle(
        &self,
        query: GetFieldSchemaQuery,
    ) -> Result<GetFieldSchemaResult, FieldConfigError> {
        self.field_config.load_schema(query.entity).await
    }
}
