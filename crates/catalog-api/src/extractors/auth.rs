//! `AuthUser` extractor: the principal verified by the access policy middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use catalog_auth::policy::Principal;
use catalog_core::error::AppError;

use crate::error::ApiError;

/// Extracted authenticated principal available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                AppError::unauthenticated("Full authentication is required to access this resource")
                    .into()
            })
    }
}
