//! Fills the request path into `StandardError` bodies.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::StandardError;

/// Rewrites error bodies produced by [`AppError`](catalog_core::error::AppError)
/// so that `path` names the request that failed.
pub async fn attach_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    if response.extensions().get::<StandardError>().is_none() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let Some(mut error) = parts.extensions.remove::<StandardError>() else {
        return Response::from_parts(parts, body);
    };
    error.path = path;

    match serde_json::to_vec(&error) {
        Ok(bytes) => {
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => Response::from_parts(parts, body),
    }
}
