//! HTTP middleware for the road network service.
//!
//! - [`RequestId`]: correlation ID, usable as an axum extractor
//! - [`extract_or_generate_request_id`]: read `X-Request-ID` or generate a UUID v7
//! - [`track_request`]: `axum::middleware::from_fn` layer recording HTTP metrics
//!
//! # Request ID Propagation
//!
//! [`track_request`] resolves the request ID once, stores it in the request
//! extensions for handlers, runs the handler inside a span carrying the ID,
//! and echoes it back in the `X-Request-ID` response header.
//!
//! # Metrics Recording
//!
//! - `http_requests_total`: Counter by method, route, status bucket
//! - `http_request_duration_seconds`: Histogram by method, route

use std::convert::Infallible;
use std::time::Instant;

use axum::extract::{FromRequestParts, MatchedPath, Request};
use axum::http::{request::Parts, HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info_span, Instrument};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Newtype wrapper for request correlation IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new time-sortable UUID v7 request ID.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Prefers the ID stored by [`track_request`]; otherwise reads the header.
impl<S: Send + Sync> FromRequestParts<S> for RequestId {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestId>()
            .cloned()
            .unwrap_or_else(|| extract_or_generate_request_id(&parts.headers)))
    }
}

/// Extract the request ID from headers or generate a new UUID v7.
///
/// Empty or non-UTF-8 `X-Request-ID` values are replaced.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

fn status_bucket(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

/// Route label for metrics: the matched route template, never the raw URI.
fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

/// Request tracking middleware.
///
/// ```ignore
/// let app = Router::new()
///     .route("/api/info", get(info))
///     .layer(axum::middleware::from_fn(track_request));
/// ```
pub async fn track_request(mut request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = route_label(&request);
    let request_id = extract_or_generate_request_id(request.headers());
    request.extensions_mut().insert(request_id.clone());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        route = %route,
    );

    let mut response = next.run(request).instrument(span.clone()).await;

    let status = response.status().as_u16();
    let elapsed = start.elapsed();
    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => route.clone(),
        "status" => status_bucket(status)
    )
    .increment(1);
    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => route
    )
    .record(elapsed.as_secs_f64());

    span.in_scope(|| {
        tracing::info!(
            status,
            latency_ms = elapsed.as_secs_f64() * 1000.0,
            "request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}
