//! # catalog-core
//!
//! Core crate for the catalog security service. Contains configuration
//! schemas, the unified error system, and the validation report types
//! shared by every other crate.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
