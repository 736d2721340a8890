//! Subscription domain module.
//!
//! - `draft` - SubscriptionDraft, DraftChange and the recompute reducer
//! - `currency` - ISO currency codes used for local-currency conversion

mod currency;
mod draft;

pub use currency::Currency;
pub use draft::{DraftChange, DraftIssue, RecomputeContext, SubscriptionDraft};
