//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for Kubernetes liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of graph vertices loaded (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices_loaded: Option<usize>,

    /// Number of directed edges loaded (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            vertices_loaded: None,
            edges_loaded: None,
        }
    }

    /// Create a ready status with graph information.
    pub fn ready(service: &str, version: &str, vertices: usize, edges: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            vertices_loaded: Some(vertices),
            edges_loaded: Some(edges),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            vertices_loaded: None,
            edges_loaded: None,
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"roadnet-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 503 when the loaded graph has no vertices, since no coordinate
/// can be snapped onto it.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"roadnet-service-shared","version":"0.1.0","vertices_loaded":9,"edges_loaded":17}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");
    let graph = state.graph();

    if graph.is_empty() {
        let status = HealthStatus::not_ready(service, version, "no road vertices loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, graph.vertex_count(), graph.edge_count());
    (StatusCode::OK, Json(status)).into_response()
}
