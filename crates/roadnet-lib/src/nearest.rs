//! Snap arbitrary coordinates onto the closest graph vertex.

use crate::geo::Vertex;
use crate::graph::Graph;

/// Find the vertex closest to `(lat, lon)`.
///
/// Distance is the squared Euclidean distance in raw `(lon, lat)` degree
/// space, not a great-circle distance. Every vertex is scanned in
/// enumeration order and only a strictly smaller distance replaces the
/// current best, so the first vertex wins ties. Returns `None` only when the
/// graph has no vertices.
pub fn find_nearest(graph: &Graph, lat: f64, lon: f64) -> Option<Vertex> {
    let mut vertices = graph.vertices();
    let first = vertices.next()?;
    let mut best = (first, first.planar_distance_sq(lon, lat));

    for vertex in vertices {
        let distance = vertex.planar_distance_sq(lon, lat);
        if distance < best.1 {
            best = (vertex, distance);
        }
    }

    Some(best.0)
}
