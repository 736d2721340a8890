//! File-based Field Config Adapter
//!
//! Reads field schemas from YAML files on disk, one file per entity:
//!
//! ```text
//! <directory>/subscription.yaml
//! <directory>/compliance.yaml
//! ```
//!
//! Each file holds a `fields:` list of field definitions.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::fields::{FieldDefinition, FieldEntity, FieldSchema};
use crate::ports::{FieldConfigError, FieldConfigSource};

#[derive(Debug, Deserialize)]
struct FieldFile {
    #[serde(default)]
    fields: Vec<FieldDefinition>,
}

/// YAML-backed field schema source
#[derive(Debug, Clone)]
pub struct YamlFieldConfig {
    directory: PathBuf,
}

impl YamlFieldConfig {
    /// Create a source reading from `directory`
    ///
    /// # Example
    /// ```ignore
    /// let source = YamlFieldConfig::new("./config/fields");
    /// ```
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self, entity: FieldEntity) -> PathBuf {
        self.directory.join(format!("{}.yaml", entity.as_str()))
    }
}

#[async_trait]
impl FieldConfigSource for YamlFieldConfig {
    async fn load_schema(&self, entity: FieldEntity) -> Result<FieldSchema, FieldConfigError> {
        let path = self.file_path(entity);

        let yaml = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FieldConfigError::NotFound(entity));
            }
            Err(e) => return Err(FieldConfigError::Io(e.to_string())),
        };

        let file: FieldFile = serde_yaml::from_str(&yaml).map_err(|e| {
            FieldConfigError::Parse(format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!(
            entity = %entity,
            fields = file.fields.len(),
            "Loaded field schema from {}",
            path.display()
        );

        Ok(FieldSchema::new(entity, file.fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::FieldType;
    use tempfile::TempDir;

    async fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).await.unwrap();
    }

    #[tokio::test]
    async fn loads_definitions_from_entity_file() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "subscription.yaml",
            concat!(
                "fields:\n",
                "  - name: cost_center\n    type: text\n    required: true\n",
                "  - name: seats\n    type: number\n",
            ),
        )
        .await;

        let source = YamlFieldConfig::new(dir.path());
        let schema = source.load_schema(FieldEntity::Subscription).await.unwrap();

        assert_eq!(schema.entity, FieldEntity::Subscription);
        assert_eq!(schema.fields.len(), 2);
        assert!(schema.get("cost_center").unwrap().required);
        assert_eq!(schema.get("seats").unwrap().field_type, FieldType::Number);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = YamlFieldConfig::new(dir.path());
        let err = source.load_schema(FieldEntity::Compliance).await.unwrap_err();
        assert!(matches!(err, FieldConfigError::NotFound(FieldEntity::Compliance)));
    }

    #[tokio::test]
    async fn malformed_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "compliance.yaml", "fields:\n  - name: filed_on\n    type: timestamp\n").await;

        let source = YamlFieldConfig::new(dir.path());
        let err = source.load_schema(FieldEntity::Compliance).await.unwrap_err();
        assert!(matches!(err, FieldConfigError::Parse(_)));
    }

    #[tokio::test]
    async fn empty_file_yields_empty_schema() {
        let dir = TempDir::new().unwrap();
        write(&dir, "compliance.yaml", "fields: []\n").await;

        let source = YamlFieldConfig::new(dir.path());
        let schema = source.load_schema(FieldEntity::Compliance).await.unwrap();
        assert!(schema.fields.is_empty());
    }
}
