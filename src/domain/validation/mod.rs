//! Field-level validation rules shared by subscription and compliance forms.

mod email;

pub use email::{is_valid_email, validate_email};
