//! In-Memory Field Config Adapter
//!
//! Holds field schemas in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::fields::{FieldEntity, FieldSchema};
use crate::ports::{FieldConfigError, FieldConfigSource};

/// In-memory field schema store
#[derive(Debug, Clone, Default)]
pub struct InMemoryFieldConfig {
    schemas: Arc<RwLock<HashMap<FieldEntity, FieldSchema>>>,
}

impl InMemoryFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given schemas
    pub fn with_schemas(schemas: impl IntoIterator<Item = FieldSchema>) -> Self {
        let map = schemas.into_iter().map(|s| (s.entity, s)).collect();
        Self {
            schemas: Arc::new(RwLock::new(map)),
        }
    }

    /// Replace the schema for its entity
    pub async fn put(&self, schema: FieldSchema) {
        self.schemas.write().await.insert(schema.entity, schema);
    }

    /// Number of configured entities
    pub async fn len(&self) -> usize {
        self.schemas.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.schemas.read().await.is_empty()
    }
}

#[async_trait]
impl FieldConfigSource for InMemoryFieldConfig {
    async fn load_schema(&self, entity: FieldEntity) -> Result<FieldSchema, FieldConfigError> {
        self.schemas
            .read()
            .await
            .get(&entity)
            .cloned()
            .ok_or(FieldConfigError::NotFound(entity))
    }
}
