//! User management handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::IntoResponse;

use catalog_service::user::{UserInsertRequest, UserUpdateRequest};

use crate::dto::response::UserResponse;
use crate::error::ApiResult;
use crate::extractors::{ValidatedJson, ValidatedPath};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.get(id).await?;
    Ok(Json(user.into()))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UserInsertRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state.user_service.insert(req).await?;
    let location = format!("/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(req): ValidatedJson<UserUpdateRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.update(id, req).await?;
    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> ApiResult<StatusCode> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
