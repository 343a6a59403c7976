//! Access log: one event per request, levelled by outcome.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Emits `info` for successes, `warn` for client errors (including policy
/// denials) and `error` for server errors.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let bearer = request
        .headers()
        .contains_key(axum::http::header::AUTHORIZATION);
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match status {
        500.. => error!(%method, %path, status, elapsed_ms, bearer, "Request failed"),
        400..=499 => warn!(%method, %path, status, elapsed_ms, bearer, "Request rejected"),
        _ => info!(%method, %path, status, elapsed_ms, bearer, "Request served"),
    }

    response
}
