//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FieldConfigSource` - Loads tenant-configured field schemas

mod field_config_source;

pub use field_config_source::{FieldConfigError, FieldConfigSource};
