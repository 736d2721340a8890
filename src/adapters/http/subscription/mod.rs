//! HTTP adapter for subscription drafts and configurable fields.
//!
//! - `POST /api/subscriptions/draft` - Recompute a draft after form edits
//! - `GET /api/fields/:entity` - Configured fields for an entity

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::{field_routes, subscription_routes};
