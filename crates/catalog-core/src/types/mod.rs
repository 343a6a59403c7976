//! Shared value types.

pub mod validation;

pub use validation::{FieldMessage, ValidationReport};
