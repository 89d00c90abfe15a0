//! Custom middleware.

use axum::{
    body::Body,
    http::{header::HeaderValue, Request},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::info;

// =====================================
// Request timing
// =====================================
/// Logs method, path, status and elapsed time for every request.
pub async fn request_timing(request: Request<Body>, next: Next) -> impl IntoResponse {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}

// =====================================
// Request ID
// =====================================
/// Attaches an `X-Request-Id` to request and response, generating one when
/// the client did not send it.
pub async fn request_id(mut request: Request<Body>, next: Next) -> impl IntoResponse {
    let request_id = request
        .headers()
        .get("X-Request-Id")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
        .unwrap_or_else(|| nanoid::nanoid!(12));

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        request.headers_mut().insert("X-Request-Id", value.clone());

        let mut response = next.run(request).await;
        response.headers_mut().insert("X-Request-Id", value);
        return response;
    }

    next.run(request).await
}
