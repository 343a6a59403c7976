//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::types::FieldMessage;

/// Standard API error response body.
///
/// `path` is filled in by [`attach_error_path`](crate::middleware::error_path::attach_error_path)
/// since errors are raised below the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardError {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error category.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Request path.
    pub path: String,
    /// Every failing field, for validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldMessage>,
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>` and use `?` on service calls; the
/// conversion from `AppError` is implicit.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Result type returned by handlers and middleware.
pub type ApiResult<T> = Result<T, ApiError>;

/// Status code and `error` category for an error kind.
pub fn status_and_category(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::InvalidClient => (StatusCode::UNAUTHORIZED, "invalid_client"),
        ErrorKind::UnsupportedGrant => (StatusCode::BAD_REQUEST, "unsupported_grant_type"),
        ErrorKind::InvalidScope => (StatusCode::BAD_REQUEST, "invalid_scope"),
        ErrorKind::InvalidCredentials | ErrorKind::PrincipalGone => {
            (StatusCode::BAD_REQUEST, "invalid_grant")
        }
        ErrorKind::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthorized"),
        ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "access_denied"),
        ErrorKind::Validation => (StatusCode::UNPROCESSABLE_ENTITY, "validation_failed"),
        ErrorKind::BadRequest => (StatusCode::BAD_REQUEST, "bad_request"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "conflict"),
        ErrorKind::Configuration | ErrorKind::Serialization | ErrorKind::Internal => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(err) = self;
        let (status, category) = status_and_category(err.kind);

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
            "Unexpected error".to_string()
        } else {
            err.message
        };

        let body = StandardError {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: category.to_string(),
            message,
            path: String::new(),
            errors: err.field_errors,
        };

        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}
