//! Field config adapters - Implementations of the FieldConfigSource port.
//!
//! - `InMemoryFieldConfig` - seeded in process, for tests and development
//! - `YamlFieldConfig` - one YAML file per entity in a directory
//! - `HttpFieldConfig` - the dashboard's configuration service

mod http;
mod in_memory;
mod yaml_file;

pub use http::{HttpFieldConfig, HttpFieldConfigSettings};
pub use in_memory::InMemoryFieldConfig;
pub use yaml_file::YamlFieldConfig;

use std::sync::Arc;

use crate::config::{FieldSourceKind, FieldsConfig};
use crate::ports::{FieldConfigError, FieldConfigSource};

/// Builds the field config source selected by `config.source`.
pub fn field_config_from(
    config: &FieldsConfig,
) -> Result<Arc<dyn FieldConfigSource>, FieldConfigError> {
    let source: Arc<dyn FieldConfigSource> = match config.source {
        FieldSourceKind::Memory => Arc::new(InMemoryFieldConfig::new()),
        FieldSourceKind::File => Arc::new(YamlFieldConfig::new(&config.directory)),
        FieldSourceKind::Http => {
            let base_url = config.base_url.clone().ok_or_else(|| {
                FieldConfigError::Transport("fields.base_url is not configured".to_string())
            })?;
            let mut settings =
                HttpFieldConfigSettings::new(base_url).with_timeout(config.timeout());
            if let Some(token) = &config.api_token {
                settings = settings.with_api_token(token.clone());
            }
            Arc::new(HttpFieldConfig::new(settings)?)
        }
    };
    Ok(source)
}
