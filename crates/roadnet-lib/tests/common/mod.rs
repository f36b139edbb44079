//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use roadnet_lib::{load_road_network, Graph, Vertex};

/// Path to the fixtures directory shared by every crate in the workspace.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the sample road network.
pub fn sample_roads_path() -> PathBuf {
    fixtures_dir().join("sample_roads.geojson")
}

static SAMPLE_GRAPH: Lazy<Graph> =
    Lazy::new(|| load_road_network(&sample_roads_path()).expect("sample roads fixture loads"));

/// The sample road network, loaded once per test binary.
pub fn sample_graph() -> Graph {
    SAMPLE_GRAPH.clone()
}

// Named vertices of the sample network, in enumeration order.
#[allow(dead_code)]
pub const PEACE_WEST: Vertex = Vertex::new(106.900, 47.910);
#[allow(dead_code)]
pub const PEACE_CHINGGIS: Vertex = Vertex::new(106.910, 47.910);
#[allow(dead_code)]
pub const PEACE_STATION: Vertex = Vertex::new(106.920, 47.910);
#[allow(dead_code)]
pub const PEACE_EAST: Vertex = Vertex::new(106.930, 47.910);
#[allow(dead_code)]
pub const CHINGGIS_NORTH: Vertex = Vertex::new(106.910, 47.920);
#[allow(dead_code)]
pub const STATION_NORTH: Vertex = Vertex::new(106.920, 47.920);
#[allow(dead_code)]
pub const RING_NORTH: Vertex = Vertex::new(106.930, 47.920);
#[allow(dead_code)]
pub const ISLAND_WEST: Vertex = Vertex::new(107.000, 48.000);
#[allow(dead_code)]
pub const ISLAND_EAST: Vertex = Vertex::new(107.010, 48.000);
