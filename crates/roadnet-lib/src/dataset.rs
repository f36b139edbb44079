use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use directories::ProjectDirs;
use geojson::{Feature, GeoJson, Geometry, JsonValue, Value};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geo::Vertex;
use crate::graph::{build_graph, Graph};
use crate::records::{MaxSpeed, RoadRecord};

/// Environment variable that overrides the dataset location.
pub const DATA_PATH_ENV: &str = "ROADNET_DATA_PATH";

/// Default filename for the dataset inside the platform data directory.
const DATASET_FILENAME: &str = "roads.geojson";

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "roadnet", "roadnet").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve the dataset path.
///
/// Resolution order:
/// 1. Explicit `target` argument.
/// 2. `ROADNET_DATA_PATH` environment variable.
/// 3. `<platform data dir>/roads.geojson`.
///
/// The resolved file must exist.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    let path = if let Some(path) = target {
        path.to_path_buf()
    } else if let Some(env_path) = env::var_os(DATA_PATH_ENV) {
        PathBuf::from(env_path)
    } else {
        default_dataset_path()?
    };

    if !path.is_file() {
        return Err(Error::DatasetNotFound { path });
    }
    debug!(path = %path.display(), "resolved road dataset");
    Ok(path)
}

/// Read road records from a GeoJSON file.
pub fn load_road_records(path: &Path) -> Result<Vec<RoadRecord>> {
    if !path.is_file() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    parse_road_records(&text)
}

/// Parse road records from GeoJSON text.
///
/// Accepts a `FeatureCollection`, a single `Feature`, or a bare geometry.
/// Each `LineString`, and each part of a `MultiLineString`, becomes one
/// record. Features without a linear geometry are skipped.
pub fn parse_road_records(text: &str) -> Result<Vec<RoadRecord>> {
    let geojson = GeoJson::from_str(text)?;
    let features = match geojson {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: None,
            foreign_members: None,
        }],
    };

    let mut records = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        let Some(geometry) = feature.geometry.as_ref() else {
            debug!(feature = index, "skipping feature without geometry");
            continue;
        };
        for points in linear_parts(index, geometry)? {
            records.push(record_from_feature(feature, points));
        }
    }

    Ok(records)
}

/// Load a GeoJSON dataset and build the road graph from it.
pub fn load_road_network(path: &Path) -> Result<Graph> {
    let started = Instant::now();
    let records = load_road_records(path)?;
    let graph = build_graph(&records);
    info!(
        path = %path.display(),
        records = records.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "loaded road network"
    );
    Ok(graph)
}

fn linear_parts(feature: usize, geometry: &Geometry) -> Result<Vec<Vec<Vertex>>> {
    match &geometry.value {
        Value::LineString(line) => Ok(vec![positions_to_vertices(feature, line)?]),
        Value::MultiLineString(lines) => lines
            .iter()
            .map(|line| positions_to_vertices(feature, line))
            .collect(),
        other => {
            debug!(feature, geometry = geometry_kind(other), "skipping non-linear geometry");
            Ok(Vec::new())
        }
    }
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn positions_to_vertices(feature: usize, positions: &[Vec<f64>]) -> Result<Vec<Vertex>> {
    positions
        .iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Ok(Vertex::new(*lon, *lat)),
            _ => Err(Error::InvalidGeometry {
                feature,
                message: format!(
                    "position has {} component(s), expected at least 2",
                    position.len()
                ),
            }),
        })
        .collect()
}

fn record_from_feature(feature: &Feature, points: Vec<Vertex>) -> RoadRecord {
    RoadRecord {
        points,
        maxspeed: feature.property("maxspeed").and_then(maxspeed_value),
        road_class: feature
            .property("fclass")
            .and_then(string_value)
            .or_else(|| feature.property("highway").and_then(string_value)),
        name: feature.property("name").and_then(string_value),
        oneway: feature.property("oneway").and_then(string_value),
    }
}

fn maxspeed_value(value: &JsonValue) -> Option<MaxSpeed> {
    match value {
        JsonValue::Number(number) => number.as_f64().map(MaxSpeed::Number),
        JsonValue::String(text) => Some(MaxSpeed::Text(text.clone())),
        _ => None,
    }
}

fn string_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(text) => Some(text.clone()),
        JsonValue::Number(number) => Some(number.to_string()),
        JsonValue::Bool(flag) => Some(if *flag { "yes" } else { "no" }.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROADS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"maxspeed": "60 mph", "fclass": "primary", "name": "Main", "oneway": "yes"},
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [0.0, 1.0, 12.5]]}
            },
            {
                "type": "Feature",
                "properties": {"maxspeed": 30, "highway": "residential"},
                "geometry": {"type": "MultiLineString", "coordinates": [[[1.0, 1.0], [1.0, 2.0]], [[2.0, 2.0], [2.0, 3.0]]]}
            },
            {
                "type": "Feature",
                "properties": {"name": "Landmark"},
                "geometry": {"type": "Point", "coordinates": [5.0, 5.0]}
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn parses_linear_features() {
        let records = parse_road_records(TWO_ROADS).unwrap();
        assert_eq!(records.len(), 3);

        let main = &records[0];
        assert_eq!(main.points, vec![Vertex::new(0.0, 0.0), Vertex::new(0.0, 1.0)]);
        assert_eq!(main.speed_kmh(), 60.0);
        assert_eq!(main.road_class(), "primary");
        assert_eq!(main.name(), "Main");
        assert!(main.is_oneway());

        let residential = &records[1];
        assert_eq!(residential.maxspeed, Some(MaxSpeed::Number(30.0)));
        assert_eq!(residential.road_class(), "residential");
        assert_eq!(residential.name(), "Unnamed");
        assert!(!residential.is_oneway());
        assert_eq!(records[2].points[0], Vertex::new(2.0, 2.0));
    }

    #[test]
    fn accepts_bare_geometry() {
        let text = r#"{"type": "LineString", "coordinates": [[3.0, 4.0], [5.0, 6.0]]}"#;
        let records = parse_road_records(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].maxspeed, None);
    }

    #[test]
    fn rejects_short_positions() {
        let text = r#"{"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[3.0], [5.0, 6.0]]}}"#;
        let error = parse_road_records(text).unwrap_err();
        assert!(matches!(error, Error::InvalidGeometry { feature: 0, .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_road_records("not geojson").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.geojson");
        match load_road_records(&missing) {
            Err(Error::DatasetNotFound { path }) => assert_eq!(path, missing),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn explicit_path_wins_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roads.geojson");
        fs::write(&path, TWO_ROADS).unwrap();
        assert_eq!(resolve_dataset_path(Some(&path)).unwrap(), path);

        let graph = load_road_network(&path).unwrap();
        assert_eq!(graph.vertex_count(), 6);
    }
}
