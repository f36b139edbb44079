//! Test utilities for handler testing.
//!
//! Provides an [`AppState`] backed by the sample road network fixture and
//! the coordinates of a few of its intersections.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use crate::state::AppState;

/// Path to the sample road network fixture.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/sample_roads.geojson"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared test state loaded from the fixture, cached after the first load.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = PathBuf::from(TEST_FIXTURE_PATH);
            AppState::load(&path)
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

pub fn fixture_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Intersections in the fixture as `(lat, lon)`.
pub mod fixture_points {
    /// West end of Peace Avenue.
    pub const PEACE_WEST: (f64, f64) = (47.910, 106.900);

    /// Peace Avenue meets Chinggis Avenue.
    pub const PEACE_CHINGGIS: (f64, f64) = (47.910, 106.910);

    /// North end of Chinggis Avenue, where one-way Station Road starts.
    pub const STATION_NORTH: (f64, f64) = (47.920, 106.920);

    /// Ring Road's northern corner.
    pub const RING_NORTH: (f64, f64) = (47.920, 106.930);

    /// West end of Island Road, unreachable from Peace Avenue.
    pub const ISLAND_WEST: (f64, f64) = (48.000, 107.000);
}

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadnet_lib::find_nearest;

    #[test]
    fn test_fixture_path_exists() {
        let path = fixture_path();
        assert!(path.exists(), "fixture not found at {:?}", path);
    }

    #[test]
    fn test_state_loads_successfully() {
        let state = test_state();
        assert_eq!(state.graph().vertex_count(), 9);
        assert_eq!(state.graph().edge_count(), 17);
    }

    #[test]
    fn test_fixture_points_are_vertices() {
        let state = test_state();
        for (lat, lon) in [
            fixture_points::PEACE_WEST,
            fixture_points::PEACE_CHINGGIS,
            fixture_points::STATION_NORTH,
            fixture_points::RING_NORTH,
            fixture_points::ISLAND_WEST,
        ] {
            let vertex = find_nearest(state.graph(), lat, lon).unwrap();
            assert_eq!((vertex.lat(), vertex.lon()), (lat, lon));
        }
    }

    #[test]
    fn test_request_id_unique() {
        assert_ne!(test_request_id(), test_request_id());
    }
}
