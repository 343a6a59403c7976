//! Registered API client entities.

pub mod model;

pub use model::{Client, PASSWORD_GRANT};
