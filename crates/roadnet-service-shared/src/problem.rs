//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use roadnet_lib::Error as LibError;

/// Problem type URI for algorithm names that are not bfs, dfs, or dijkstra.
pub const PROBLEM_UNKNOWN_ALGORITHM: &str = "/problems/unknown-algorithm";

/// Problem type URI for searches that found no path.
pub const PROBLEM_PATH_NOT_FOUND: &str = "/problems/path-not-found";

/// Problem type URI for a graph with no vertices to snap coordinates onto.
pub const PROBLEM_EMPTY_GRAPH: &str = "/problems/empty-graph";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// Problem type URI for service unavailable (e.g., dataset missing).
pub const PROBLEM_SERVICE_UNAVAILABLE: &str = "/problems/service-unavailable";

/// RFC 9457 Problem Details response structure.
///
/// Provides a consistent format for error responses across all service endpoints.
///
/// # Example
///
/// ```
/// use roadnet_service_shared::{ProblemDetails, PROBLEM_PATH_NOT_FOUND};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_PATH_NOT_FOUND,
///     "Path Not Found",
///     StatusCode::NOT_FOUND,
/// )
/// .with_detail("No path found using dijkstra")
/// .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (e.g., request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Content type for this response (always "application/problem+json").
    pub content_type: String,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Create a 400 Bad Request problem for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 400 Bad Request problem for an unrecognised algorithm name.
    pub fn unknown_algorithm(name: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_UNKNOWN_ALGORITHM,
            "Unknown Algorithm",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(format!(
            "Algorithm '{}' is not supported; expected bfs, dfs, or dijkstra",
            name
        ))
        .with_request_id(request_id)
    }

    /// Create a 400 Bad Request problem for coordinates that cannot be snapped.
    pub fn empty_graph(request_id: impl Into<String>) -> Self {
        Self::new(PROBLEM_EMPTY_GRAPH, "Empty Graph", StatusCode::BAD_REQUEST)
            .with_detail("The road graph has no vertices to snap coordinates onto")
            .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for a search that found no path.
    pub fn path_not_found(algorithm: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_PATH_NOT_FOUND,
            "Path Not Found",
            StatusCode::NOT_FOUND,
        )
        .with_detail(format!("No path found using {}", algorithm))
        .with_request_id(request_id)
    }

    /// Create a 500 Internal Server Error problem.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 503 Service Unavailable problem.
    pub fn service_unavailable(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_SERVICE_UNAVAILABLE,
            "Service Unavailable",
            StatusCode::SERVICE_UNAVAILABLE,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

/// Implement IntoResponse for axum to return ProblemDetails as HTTP responses.
impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Set the content-type header to application/problem+json
        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );

        // Update status code
        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownAlgorithm { name } => ProblemDetails::unknown_algorithm(name, request_id),
        LibError::EmptyGraph => ProblemDetails::empty_graph(request_id),
        LibError::RouteNotFound { algorithm } => {
            ProblemDetails::path_not_found(algorithm, request_id)
        }
        LibError::DatasetNotFound { path } => ProblemDetails::service_unavailable(
            format!("Dataset not available at {}", path.display()),
            request_id,
        ),
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}
