//! Security middleware for HTTP headers and request size validation

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::api::types::ApiError;
use crate::domain::DomainError;

const PAGE_CSP: &str = "default-src 'self'; \
     style-src 'self' 'unsafe-inline'; \
     img-src 'self' data:; \
     frame-ancestors 'none'";

const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

/// Middleware to add security headers to all responses
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path();
    let is_page = path == "/" || path.starts_with("/static");

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(if is_page { PAGE_CSP } else { API_CSP }),
    );

    if !is_page && !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        );
    }

    response
}

/// Rejects requests whose declared `Content-Length` exceeds the limit before
/// any handler reads the body. Bodies without the header are bounded by
/// `DefaultBodyLimit` instead.
pub async fn content_length_middleware(
    State(max_body_size): State<usize>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let declared = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    if let Err(e) = validate_content_length(declared, max_body_size) {
        warn!(
            path = %request.uri().path(),
            declared = declared.unwrap_or_default(),
            error = %e,
            "Rejected oversized request"
        );
        return ApiError::from(e).into_response();
    }

    next.run(request).await
}

/// Validate content length to prevent oversized requests
pub fn validate_content_length(
    content_length: Option<usize>,
    max_body_size: usize,
) -> Result<(), DomainError> {
    match content_length {
        Some(len) if len > max_body_size => Err(DomainError::payload_too_large(max_body_size)),
        _ => Ok(()),
    }
}
