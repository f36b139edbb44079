use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the road network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Searches never fail: an unreachable target or an endpoint outside the
/// graph is reported through [`crate::SearchResult::found`]. These variants
/// cover loading data and resolving caller input.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("road dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the road dataset")]
    ProjectDirsUnavailable,

    /// A feature carried coordinates the loader cannot interpret.
    #[error("invalid geometry in feature {feature}: {message}")]
    InvalidGeometry { feature: usize, message: String },

    /// The graph has no vertices, so coordinates cannot be snapped to it.
    #[error("road graph is empty")]
    EmptyGraph,

    /// Raised when an algorithm name is not recognised.
    #[error("unknown search algorithm: {name} (expected bfs, dfs, or dijkstra)")]
    UnknownAlgorithm { name: String },

    /// Raised by callers that need an error for a search with `found == false`.
    #[error("no path found using {algorithm}")]
    RouteNotFound { algorithm: String },

    /// Wrapper for GeoJSON parsing errors.
    #[error(transparent)]
    GeoJson(#[from] geojson::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
