//! Subtrack - Billing cycle calculator for subscription tracking
//!
//! Derives billing period boundaries and renewal dates from a start date and
//! a billing cycle, and keeps subscription drafts' derived fields in sync.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
