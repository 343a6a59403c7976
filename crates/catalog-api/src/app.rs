//! Application builder: wires stores, auth components and services into
//! state, and state plus middleware into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use catalog_auth::enhancer::{EnhancerChain, UserInfoEnhancer};
use catalog_auth::jwt::{JwtDecoder, JwtEncoder};
use catalog_auth::password::PasswordHasher;
use catalog_auth::policy::AccessPolicy;
use catalog_auth::token::TokenIssuer;
use catalog_core::config::{AppConfig, CorsConfig};
use catalog_core::result::AppResult;
use catalog_database::store::{ClientStore, RoleStore, UserStore};
use catalog_database::{MemoryClientStore, MemoryRoleStore, MemoryUserStore};
use catalog_service::bootstrap::seed_credentials;
use catalog_service::user::UserService;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Creates the credential store, seeds it from configuration and wires
/// every component into [`AppState`].
///
/// Fails on an invalid rule table or seed data.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let clients: Arc<dyn ClientStore> = Arc::new(MemoryClientStore::new());
    let roles: Arc<dyn RoleStore> = Arc::new(MemoryRoleStore::new());
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let hasher = Arc::new(PasswordHasher::new());

    seed_credentials(
        &config,
        clients.as_ref(),
        roles.as_ref(),
        users.as_ref(),
        &hasher,
    )
    .await?;

    let access_policy = AccessPolicy::from_config(&config.security)?;
    info!(rules = access_policy.rules().len(), "Access policy loaded");

    let enhancers =
        EnhancerChain::new().with(Arc::new(UserInfoEnhancer::new(Arc::clone(&users))));

    let token_issuer = TokenIssuer::new(
        &config.auth,
        clients,
        Arc::clone(&users),
        Arc::clone(&hasher),
        Arc::new(JwtEncoder::new(&config.auth)),
        enhancers,
    )?;

    let user_service = UserService::new(users, roles, hasher);

    Ok(AppState {
        jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
        token_issuer: Arc::new(token_issuer),
        access_policy: Arc::new(access_policy),
        user_service: Arc::new(user_service),
        config: Arc::new(config),
    })
}
