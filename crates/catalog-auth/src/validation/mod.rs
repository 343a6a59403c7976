//! Cross-record validation rules.

pub mod uniqueness;

pub use uniqueness::UniquenessValidator;
