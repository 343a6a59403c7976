//! # catalog-entity
//!
//! Domain entity models for the catalog security core. Every struct in this
//! crate is a stored record or a value object; all derive `Debug`, `Clone`,
//! `Serialize` and `Deserialize`.

pub mod client;
pub mod user;
