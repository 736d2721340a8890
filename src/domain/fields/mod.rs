//! Configurable field sets.
//!
//! - `value` - FieldType and the FieldValue tagged variant
//! - `schema` - FieldDefinition, FieldSchema and schema checks

mod schema;
mod value;

pub use schema::{FieldDefinition, FieldEntity, FieldIssue, FieldSchema};
pub use value::{FieldType, FieldValue};
