//! # catalog-api
//!
//! HTTP API layer for the catalog security core built on Axum.
//!
//! Provides the OAuth2 token endpoints, the user endpoints, the
//! access-policy middleware that guards every route, and the mapping of
//! [`AppError`](catalog_core::error::AppError) to `StandardError` bodies.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
