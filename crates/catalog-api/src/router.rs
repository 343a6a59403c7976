//! Route definitions for the catalog HTTP API.
//!
//! Every route sits behind the access policy middleware; the policy table,
//! not the individual handlers, decides who may call what.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(oauth_routes())
        .merge(user_routes())
        .merge(actuator_routes())
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::access::enforce_access_policy,
        ))
        .layer(axum_middleware::from_fn(
            middleware::error_path::attach_error_path,
        ))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// OAuth2 endpoints: token issuance and introspection
fn oauth_routes() -> Router<AppState> {
    Router::new()
        .route("/oauth/token", post(handlers::token::issue_token))
        .route("/oauth/check_token", get(handlers::token::check_token))
}

/// User management endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
}

/// Liveness endpoint, outside the rule table
fn actuator_routes() -> Router<AppState> {
    Router::new().route("/actuator/health", get(handlers::health::health))
}
