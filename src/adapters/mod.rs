//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `field_config` - Field schema sources (in-memory, YAML files, HTTP)
//! - `http` - REST API (axum)

pub mod field_config;
pub mod http;

pub use field_config::{
    field_config_from, HttpFieldConfig, HttpFieldConfigSettings, InMemoryFieldConfig,
    YamlFieldConfig,
};
pub use http::{api_router, AppState};
