use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;

use crate::geo::Vertex;
use crate::path::SearchResult;
use crate::routing::SearchAlgorithm;

/// Maximum number of visited vertices included in API responses.
pub const VISITED_RESPONSE_LIMIT: usize = 500;

/// Round to two decimal places, the precision used for reported distances.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compact, serializable view of a [`SearchResult`].
///
/// Coordinates are emitted as `[lat, lon]` pairs, `visited` is truncated to
/// the first [`VISITED_RESPONSE_LIMIT`] entries while `visited_count`
/// reports the full count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSummary {
    pub algorithm: SearchAlgorithm,
    pub found: bool,
    pub path: Vec<[f64; 2]>,
    pub visited: Vec<[f64; 2]>,
    pub distance: f64,
    pub path_length: usize,
    pub visited_count: usize,
}

impl SearchSummary {
    pub fn from_result(algorithm: SearchAlgorithm, result: &SearchResult) -> Self {
        Self {
            algorithm,
            found: result.found,
            path: result.path.iter().map(Vertex::as_lat_lon).collect(),
            visited: result
                .visited
                .iter()
                .take(VISITED_RESPONSE_LIMIT)
                .map(Vertex::as_lat_lon)
                .collect(),
            distance: round2(result.distance),
            path_length: result.path_len(),
            visited_count: result.visited_count(),
        }
    }
}

/// Convert a search result into a GeoJSON `FeatureCollection`.
///
/// The first feature is the path (`kind = "path"`), present only when a path
/// was found. It is a `LineString`, or a `Point` when start and end coincide.
/// It is followed by one `Point` per visited vertex (`kind = "visited"`,
/// `order` = finalization index) up to `visited_limit`.
pub fn search_to_geojson(result: &SearchResult, visited_limit: usize) -> FeatureCollection {
    let mut features = Vec::new();

    if result.found && !result.path.is_empty() {
        let value = match result.path.as_slice() {
            [single] => Value::Point(single.as_lon_lat().to_vec()),
            path => Value::LineString(path.iter().map(|v| v.as_lon_lat().to_vec()).collect()),
        };
        let mut properties = JsonObject::new();
        properties.insert("kind".to_string(), JsonValue::from("path"));
        properties.insert("distance_km".to_string(), JsonValue::from(round2(result.distance)));
        properties.insert("path_len".to_string(), JsonValue::from(result.path_len()));
        features.push(feature(value, properties));
    }

    for (order, vertex) in result.visited.iter().take(visited_limit).enumerate() {
        let mut properties = JsonObject::new();
        properties.insert("kind".to_string(), JsonValue::from("visited"));
        properties.insert("order".to_string(), JsonValue::from(order));
        features.push(feature(Value::Point(vertex.as_lon_lat().to_vec()), properties));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
