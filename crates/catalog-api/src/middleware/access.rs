//! Access policy enforcement.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use tracing::debug;

use catalog_auth::policy::Principal;

use crate::error::ApiResult;
use crate::state::AppState;

/// Resolves the optional bearer token, evaluates the access policy and
/// rejects the request before any handler runs.
///
/// A token that fails verification leaves the caller anonymous. On success
/// the verified [`Principal`] is placed into the request extensions.
pub async fn enforce_access_policy(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let principal = resolve_principal(&state, &request);

    state
        .access_policy
        .authorize(request.method(), request.uri().path(), principal.as_ref())
        .into_result()?;

    if let Some(principal) = principal {
        request.extensions_mut().insert(principal);
    }

    Ok(next.run(request).await)
}

fn resolve_principal(state: &AppState, request: &Request) -> Option<Principal> {
    let bearer = request.headers().typed_get::<Authorization<Bearer>>()?;
    match state.jwt_decoder.decode_access_token(bearer.token()) {
        Ok(claims) => Some(claims.principal()),
        Err(e) => {
            debug!(path = %request.uri().path(), error = %e.message, "Bearer token rejected");
            None
        }
    }
}
