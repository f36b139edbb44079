//! Shared HTTP infrastructure for the road network service.
//!
//! - [`AppState`]: the road graph, built once at startup
//! - [`health`]: liveness/readiness probe handlers
//! - [`ProblemDetails`]: RFC 9457 Problem Details for error responses
//! - [`ServiceResponse`]: `{"status":"success", ...}` wrapper for successful responses
//! - [`metrics`]: Prometheus metrics
//! - [`logging`]: structured JSON logging setup
//! - [`middleware`]: request IDs and HTTP metrics
//! - Request bodies with validation for each endpoint
//!
//! # Architecture
//!
//! Handlers stay thin; snapping, searching, and output shaping live in
//! `roadnet-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON                                       │
//! │  - Validate coordinates and algorithm                       │
//! │  - Call roadnet-lib APIs                                    │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a fixture-backed state for handler
//! testing. Enable the `test-utils` feature to access it from dependent crates.

mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_request_rejected, record_search_completed,
    record_search_not_found, record_vertices_visited, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, track_request, RequestId};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_EMPTY_GRAPH, PROBLEM_INTERNAL_ERROR,
    PROBLEM_INVALID_REQUEST, PROBLEM_PATH_NOT_FOUND, PROBLEM_SERVICE_UNAVAILABLE,
    PROBLEM_UNKNOWN_ALGORITHM,
};
pub use request::{CompareBody, SearchBody, Validate};
pub use response::{ServiceResponse, STATUS_SUCCESS};
pub use state::{AppState, AppStateError};
