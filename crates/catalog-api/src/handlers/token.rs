//! OAuth2 token handlers: issuance and introspection.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::{CACHE_CONTROL, PRAGMA};
use axum::response::IntoResponse;
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::{Authorization, HeaderMapExt};

use catalog_auth::jwt::Claims;
use catalog_auth::token::TokenRequest;
use catalog_core::error::AppError;

use crate::dto::request::{CheckTokenQuery, TokenForm};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedForm, ValidatedQuery};
use crate::state::AppState;

/// POST /oauth/token
pub async fn issue_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedForm(form): ValidatedForm<TokenForm>,
) -> ApiResult<impl IntoResponse> {
    let (client_id, client_secret) = match headers.typed_get::<Authorization<Basic>>() {
        Some(basic) => (basic.username().to_string(), basic.password().to_string()),
        None => match (form.client_id, form.client_secret) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                return Err(AppError::invalid_client(
                    "Full authentication is required to access this resource",
                )
                .into());
            }
        },
    };

    let request = TokenRequest {
        client_id,
        client_secret,
        grant_type: form.grant_type,
        username: form.username,
        password: form.password,
        scope: TokenRequest::parse_scope(form.scope.as_deref()),
    };

    let token = state.token_issuer.issue_token(&request).await?;

    Ok((
        [(CACHE_CONTROL, "no-store"), (PRAGMA, "no-cache")],
        Json(token),
    ))
}

/// GET /oauth/check_token
pub async fn check_token(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<CheckTokenQuery>,
) -> ApiResult<Json<Claims>> {
    let claims = state
        .jwt_decoder
        .decode_access_token(&query.token)
        .map_err(|e| AppError::bad_request(format!("Token was not recognised: {}", e.message)))?;
    Ok(Json(claims))
}
