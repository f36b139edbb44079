//! Road network library entry points.
//!
//! This crate exposes helpers to locate and load a road dataset, build the
//! directed road graph, snap coordinates onto it, and run the BFS, DFS, and
//! Dijkstra searches. Higher-level consumers (CLI, HTTP service) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod nearest;
pub mod output;
pub mod path;
pub mod records;
pub mod report;
pub mod routing;

pub use dataset::{
    default_dataset_path, load_road_network, load_road_records, parse_road_records,
    resolve_dataset_path, DATA_PATH_ENV,
};
pub use error::{Error, Result};
pub use geo::{haversine_km, Vertex, EARTH_RADIUS_KM};
pub use graph::{build_graph, Edge, Graph, GraphBuilder, GraphStats};
pub use nearest::find_nearest;
pub use output::{round2, search_to_geojson, SearchSummary, VISITED_RESPONSE_LIMIT};
pub use path::{search_bfs, search_dfs, search_dijkstra, SearchResult};
pub use records::{MaxSpeed, RoadRecord, DEFAULT_SPEED_KMH};
pub use report::{benchmark_report, BenchmarkCase, BenchmarkReport, CaseReport, GraphInfo};
pub use routing::{
    compare_algorithms, compare_coordinates, plan_search, select_planner, AlgorithmRun,
    Comparison, LatLon, SearchAlgorithm, SearchPlan, SearchPlanner, SearchRequest,
};
