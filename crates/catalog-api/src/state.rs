//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use catalog_auth::jwt::JwtDecoder;
use catalog_auth::policy::AccessPolicy;
use catalog_auth::token::TokenIssuer;
use catalog_core::config::AppConfig;
use catalog_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Password-grant token issuer
    pub token_issuer: Arc<TokenIssuer>,
    /// Access token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Request authorization table
    pub access_policy: Arc<AccessPolicy>,
    /// User management service
    pub user_service: Arc<UserService>,
}
