//! Prometheus metrics for the road network service.
//!
//! - [`MetricsConfig`]: configuration read from the environment
//! - [`init_metrics`]: install the Prometheus recorder
//! - [`metrics_handler`]: axum handler for `/metrics`
//! - search metric helpers (`roadnet_*` series)
//!
//! # Example
//!
//! ```no_run
//! use roadnet_service_shared::metrics::{MetricsConfig, init_metrics, metrics_handler};
//! use axum::{Router, routing::get};
//!
//! let config = MetricsConfig::default();
//! init_metrics(&config).expect("failed to initialize metrics");
//!
//! let app: Router = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Path for the metrics endpoint (e.g., "/metrics").
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "false" disables collection (default: enabled)
    /// - `METRICS_PATH`: Path for metrics endpoint (default: "/metrics")
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| parse_enabled(&v))
            .unwrap_or(true);

        let path = std::env::var("METRICS_PATH").unwrap_or_else(|_| "/metrics".to_string());

        Self { enabled, path }
    }
}

fn parse_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Install the Prometheus recorder.
///
/// Must be called once at startup before any metrics are recorded.
///
/// # Errors
///
/// Returns an error if metrics are disabled, already initialized, or the
/// recorder fails to install.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Returns `None` if [`init_metrics`] has not been called.
pub fn prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

/// Axum handler for the `/metrics` endpoint (Prometheus exposition text).
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

#[derive(Debug, Clone)]
pub enum MetricsError {
    Disabled,
    AlreadyInitialized,
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Search Metrics Helpers
// =============================================================================

/// Record a search that reached its destination.
///
/// Increments `roadnet_searches_completed_total` and records the path length
/// to the `roadnet_path_vertices` histogram.
pub fn record_search_completed(algorithm: &str, path_length: usize) {
    metrics::counter!(
        "roadnet_searches_completed_total",
        "algorithm" => algorithm.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "roadnet_path_vertices",
        "algorithm" => algorithm.to_string()
    )
    .record(path_length as f64);
}

/// Record a search that exhausted its component without reaching the end.
pub fn record_search_not_found(algorithm: &str) {
    metrics::counter!(
        "roadnet_searches_not_found_total",
        "algorithm" => algorithm.to_string()
    )
    .increment(1);
}

/// Record how many vertices a search finalized.
pub fn record_vertices_visited(algorithm: &str, visited: usize) {
    metrics::histogram!(
        "roadnet_vertices_visited",
        "algorithm" => algorithm.to_string()
    )
    .record(visited as f64);
}

/// Record a rejected request (`reason` e.g. "validation_error", "unknown_algorithm").
pub fn record_request_rejected(reason: &str, endpoint: &str) {
    metrics::counter!(
        "roadnet_requests_rejected_total",
        "reason" => reason.to_string(),
        "endpoint" => endpoint.to_string()
    )
    .increment(1);
}
