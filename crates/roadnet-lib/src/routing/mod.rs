//! Search planning for road network pathfinding.
//!
//! This module provides:
//! - [`SearchAlgorithm`] - Supported search algorithms (BFS, DFS, Dijkstra)
//! - [`SearchRequest`] - Coordinates to connect plus the algorithm to use
//! - [`SearchPlan`] - Snapped endpoints, the search result, and its timing
//! - [`plan_search`] - Main entry point: snap coordinates, run the planner
//! - [`compare_algorithms`] - Run every algorithm on the same endpoints
//!
//! # Example
//!
//! ```ignore
//! use roadnet_lib::{load_road_network, plan_search, SearchRequest, LatLon};
//!
//! let graph = load_road_network("roads.geojson")?;
//! let request = SearchRequest::dijkstra(LatLon::new(47.91, 106.90), LatLon::new(47.92, 106.95));
//! let plan = plan_search(&graph, &request)?;
//! println!("{:.2} km over {} hops", plan.result.distance, plan.result.hop_count());
//! ```

mod planner;

pub use planner::{select_planner, BfsPlanner, DfsPlanner, DijkstraPlanner, SearchPlanner};

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geo::Vertex;
use crate::graph::Graph;
use crate::nearest::find_nearest;
use crate::path::SearchResult;

/// Supported search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Breadth-first search (fewest hops).
    Bfs,
    /// Depth-first search (exploration order only).
    Dfs,
    /// Dijkstra's algorithm (shortest distance).
    #[default]
    Dijkstra,
}

impl SearchAlgorithm {
    /// Every algorithm, in the order comparisons report them.
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::Dijkstra,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dfs => "dfs",
            SearchAlgorithm::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(SearchAlgorithm::Bfs),
            "dfs" => Ok(SearchAlgorithm::Dfs),
            "dijkstra" => Ok(SearchAlgorithm::Dijkstra),
            _ => Err(Error::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// A geographic coordinate supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Snap to the nearest graph vertex.
    pub fn snap(&self, graph: &Graph) -> Result<Vertex> {
        find_nearest(graph, self.lat, self.lon).ok_or(Error::EmptyGraph)
    }
}

/// High-level search request between two arbitrary coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub start: LatLon,
    pub end: LatLon,
    #[serde(default)]
    pub algorithm: SearchAlgorithm,
}

impl SearchRequest {
    pub fn new(start: LatLon, end: LatLon, algorithm: SearchAlgorithm) -> Self {
        Self {
            start,
            end,
            algorithm,
        }
    }

    /// Convenience constructor for the default shortest-path search.
    pub fn dijkstra(start: LatLon, end: LatLon) -> Self {
        Self::new(start, end, SearchAlgorithm::Dijkstra)
    }
}

/// Planned search returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPlan {
    pub algorithm: SearchAlgorithm,
    /// Vertex the start coordinate snapped to.
    pub start: Vertex,
    /// Vertex the end coordinate snapped to.
    pub end: Vertex,
    pub result: SearchResult,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SearchPlan {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Snap both request coordinates onto the graph and run the requested search.
///
/// Fails only when the graph is empty; an unreachable target is a
/// successful plan whose result has `found == false`.
pub fn plan_search(graph: &Graph, request: &SearchRequest) -> Result<SearchPlan> {
    let start = request.start.snap(graph)?;
    let end = request.end.snap(graph)?;
    tracing::debug!(%start, %end, algorithm = %request.algorithm, "snapped search endpoints");

    let planner = select_planner(request.algorithm);
    let (result, elapsed) = timed(|| planner.search(graph, start, end));

    tracing::debug!(
        algorithm = %request.algorithm,
        found = result.found,
        visited = result.visited_count(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "search finished"
    );

    Ok(SearchPlan {
        algorithm: planner.algorithm(),
        start,
        end,
        result,
        elapsed,
    })
}

/// Summary of one algorithm inside a [`Comparison`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: SearchAlgorithm,
    pub found: bool,
    pub distance_km: f64,
    pub path_length: usize,
    pub visited_count: usize,
    pub elapsed_ms: f64,
}

impl AlgorithmRun {
    fn from_result(algorithm: SearchAlgorithm, result: &SearchResult, elapsed: Duration) -> Self {
        Self {
            algorithm,
            found: result.found,
            distance_km: result.distance,
            path_length: result.path_len(),
            visited_count: result.visited_count(),
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

/// All three algorithms run against the same pair of vertices.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub start: Vertex,
    pub end: Vertex,
    pub runs: Vec<AlgorithmRun>,
}

impl Comparison {
    pub fn run(&self, algorithm: SearchAlgorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|run| run.algorithm == algorithm)
    }

    /// Algorithm with the shortest distance among runs that found a path.
    pub fn shortest(&self) -> Option<SearchAlgorithm> {
        self.runs
            .iter()
            .filter(|run| run.found)
            .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
            .map(|run| run.algorithm)
    }

    /// Algorithm with the lowest wall-clock time.
    pub fn fastest(&self) -> Option<SearchAlgorithm> {
        self.runs
            .iter()
            .min_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
            .map(|run| run.algorithm)
    }

    /// Algorithm that finalized the fewest vertices.
    pub fn fewest_visited(&self) -> Option<SearchAlgorithm> {
        self.runs
            .iter()
            .min_by_key(|run| run.visited_count)
            .map(|run| run.algorithm)
    }
}

/// Run every algorithm between two vertices, timing each one.
pub fn compare_algorithms(graph: &Graph, start: Vertex, end: Vertex) -> Comparison {
    let runs = SearchAlgorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let planner = select_planner(algorithm);
            let (result, elapsed) = timed(|| planner.search(graph, start, end));
            AlgorithmRun::from_result(algorithm, &result, elapsed)
        })
        .collect();

    Comparison { start, end, runs }
}

/// Snap two coordinates and compare every algorithm between them.
pub fn compare_coordinates(graph: &Graph, start: LatLon, end: LatLon) -> Result<Comparison> {
    let start = start.snap(graph)?;
    let end = end.snap(graph)?;
    Ok(compare_algorithms(graph, start, end))
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed())
}
