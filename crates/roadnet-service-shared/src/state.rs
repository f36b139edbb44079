//! Application state for the HTTP service.
//!
//! This module provides the shared state structure that axum handlers use to
//! access the loaded road graph.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use roadnet_lib::{load_road_network, Error as LibError, Graph};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to load or parse the road dataset.
    NetworkLoad(LibError),

    /// Dataset file not found.
    DatasetNotFound(String),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkLoad(e) => write!(f, "failed to load road network: {}", e),
            Self::DatasetNotFound(path) => write!(f, "road dataset not found: {}", path),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NetworkLoad(e) => Some(e),
            Self::DatasetNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::NetworkLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// The graph is built once at startup and never mutated, so handlers read it
/// concurrently without locking. Cloning is cheap (`Arc` internally).
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use roadnet_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let graph = state.graph();
///     // ... use graph
/// }
///
/// let state = AppState::load("path/to/roads.geojson").unwrap();
/// let app = Router::new()
///     .route("/api/info", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    graph: Graph,
    load_time: Duration,
}

impl AppState {
    /// Load application state from a GeoJSON road dataset.
    pub fn load(dataset_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let dataset_path = dataset_path.as_ref();

        if !dataset_path.exists() {
            return Err(AppStateError::DatasetNotFound(
                dataset_path.display().to_string(),
            ));
        }

        tracing::info!(path = %dataset_path.display(), "loading road network");
        let started = Instant::now();
        let graph = load_road_network(dataset_path)?;
        let load_time = started.elapsed();
        tracing::info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            load_time_ms = load_time.as_millis() as u64,
            "road network loaded successfully"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { graph, load_time }),
        })
    }

    /// Create application state from a pre-built graph.
    ///
    /// This is useful for testing.
    pub fn from_graph(graph: Graph) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                graph,
                load_time: Duration::ZERO,
            }),
        }
    }

    /// Access the loaded road graph.
    pub fn graph(&self) -> &Graph {
        &self.inner.graph
    }

    /// Time spent loading and building the graph at startup.
    pub fn load_time(&self) -> Duration {
        self.inner.load_time
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("vertex_count", &self.inner.graph.vertex_count())
            .field("edge_count", &self.inner.graph.edge_count())
            .finish()
    }
}
