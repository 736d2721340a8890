//! Subscription handlers.
//!
//! ## Commands
//! - Recompute a subscription draft after form edits
//!
//! ## Queries
//! - Get the configured field schema for an entity

mod get_field_schema;
mod recompute_draft;

// Commands
pub use recompute_draft::{RecomputeDraftCommand, RecomputeDraftHandler, RecomputeDraftResult};

// Queries
pub use get_field_schema::{GetFieldSchemaHandler, GetFieldSchemaQuery, GetFieldSchemaResult};
