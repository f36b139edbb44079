//! Road network path search HTTP service.
//!
//! # Endpoints
//!
//! - `GET /api/info` - Vertex and edge counts of the loaded graph
//! - `POST /api/search` - Run one algorithm between two coordinates
//! - `POST /api/compare` - Run BFS, DFS, and Dijkstra between two coordinates
//! - `POST /api/visualize` - Search result as a GeoJSON `FeatureCollection`
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

pub mod config;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use roadnet_service_shared::{health_live, health_ready, metrics_handler, track_request, AppState};

pub use config::{ServiceConfig, DEFAULT_DATA_PATH, DEFAULT_PORT};

/// Build the service router over a loaded graph.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/info", get(handlers::info_handler))
        .route("/api/search", post(handlers::search_handler))
        .route("/api/compare", post(handlers::compare_handler))
        .route("/api/visualize", post(handlers::visualize_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(axum::middleware::from_fn(track_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
