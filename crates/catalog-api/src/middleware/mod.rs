//! Axum middleware stack.

pub mod access;
pub mod cors;
pub mod error_path;
pub mod logging;
