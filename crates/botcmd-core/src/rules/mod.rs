//! Validation rules shared by every write path and the preview renderer

pub mod validation;

pub use validation::{normalize_name, normalize_responses};
