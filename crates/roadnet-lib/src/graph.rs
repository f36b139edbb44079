use std::cmp::Ordering;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::geo::{haversine_km, Vertex};
use crate::records::{travel_time_minutes, RoadRecord};

/// Directed edge within the road graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub target: Vertex,
    /// Great-circle length in kilometres. Never negative.
    pub weight: f64,
    /// Estimated travel time in minutes; infinite when the speed is not positive.
    pub travel_time: f64,
    pub road_class: Arc<str>,
    pub name: Arc<str>,
    /// Set only on the forward edge of a road tagged `oneway=yes`.
    pub oneway: bool,
}

/// Immutable directed road graph.
///
/// Vertices enumerate in first-appearance order while scanning the input
/// records; each vertex's outgoing edges enumerate in the order the ordered
/// pair was first inserted. Cloning is cheap and shares the adjacency.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<IndexMap<Vertex, Vec<Edge>>>,
}

/// Aggregate figures describing a built graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub oneway_edges: usize,
    pub total_length_km: f64,
}

impl Graph {
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Vertices in enumeration order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Vertex at position `index` in enumeration order.
    pub fn vertex_at(&self, index: usize) -> Option<Vertex> {
        self.adjacency.get_index(index).map(|(vertex, _)| *vertex)
    }

    /// Return the outgoing edges for a vertex (empty when absent).
    pub fn neighbours(&self, vertex: Vertex) -> &[Edge] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The directed edge `from -> to`, if present.
    pub fn edge(&self, from: Vertex, to: Vertex) -> Option<&Edge> {
        self.neighbours(from).iter().find(|edge| edge.target == to)
    }

    /// Sum of edge weights along `path`, or `None` if a hop has no edge.
    pub fn path_length_km(&self, path: &[Vertex]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |total, hop| {
            self.edge(hop[0], hop[1]).map(|edge| total + edge.weight)
        })
    }

    /// Sum of travel times along `path`, or `None` if a hop has no edge.
    pub fn path_travel_time_min(&self, path: &[Vertex]) -> Option<f64> {
        path.windows(2).try_fold(0.0, |total, hop| {
            self.edge(hop[0], hop[1]).map(|edge| total + edge.travel_time)
        })
    }

    pub fn stats(&self) -> GraphStats {
        let edges = self.adjacency.values().flatten();
        let (count, oneway, length) = edges.fold((0, 0, 0.0), |(count, oneway, length), edge| {
            (count + 1, oneway + usize::from(edge.oneway), length + edge.weight)
        });
        GraphStats {
            vertices: self.vertex_count(),
            edges: count,
            oneway_edges: oneway,
            total_length_km: length,
        }
    }
}

/// Incremental graph construction from road records.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: IndexMap<Vertex, Vec<Edge>>,
    records: usize,
    skipped: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every consecutive point pair of `record` as a directed edge, plus
    /// the reverse edge unless the record is one-way.
    ///
    /// Records with fewer than two points are skipped.
    pub fn add_record(&mut self, record: &RoadRecord) {
        self.records += 1;
        if record.points.len() < 2 {
            self.skipped += 1;
            tracing::debug!(points = record.points.len(), "skipping degenerate road record");
            return;
        }

        let speed = record.speed_kmh();
        let road_class: Arc<str> = Arc::from(record.road_class());
        let name: Arc<str> = Arc::from(record.name());
        let oneway = record.is_oneway();

        for hop in record.points.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            let weight = haversine_km(from, to);
            let travel_time = travel_time_minutes(weight, speed);

            self.insert_edge(
                from,
                Edge {
                    target: to,
                    weight,
                    travel_time,
                    road_class: Arc::clone(&road_class),
                    name: Arc::clone(&name),
                    oneway,
                },
            );

            if !oneway {
                self.insert_edge(
                    to,
                    Edge {
                        target: from,
                        weight,
                        travel_time,
                        road_class: Arc::clone(&road_class),
                        name: Arc::clone(&name),
                        oneway: false,
                    },
                );
            }
        }
    }

    /// Insert `from -> edge.target`, collapsing parallel edges onto the
    /// lightest one while keeping the pair's first enumeration slot.
    fn insert_edge(&mut self, from: Vertex, edge: Edge) {
        self.adjacency.entry(from).or_default();
        self.adjacency.entry(edge.target).or_default();

        let Some(entry) = self.adjacency.get_mut(&from) else {
            return;
        };
        if let Some(existing) = entry.iter_mut().find(|existing| existing.target == edge.target) {
            if compare_edges(&edge, existing) == Ordering::Less {
                *existing = edge;
            }
            return;
        }
        entry.push(edge);
    }

    pub fn finish(self) -> Graph {
        let graph = Graph {
            adjacency: Arc::new(self.adjacency),
        };
        tracing::info!(
            records = self.records,
            skipped = self.skipped,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "road graph built"
        );
        graph
    }
}

/// Build the directed road graph from an ordered sequence of records.
pub fn build_graph<'a, I>(records: I) -> Graph
where
    I: IntoIterator<Item = &'a RoadRecord>,
{
    let mut builder = GraphBuilder::new();
    for record in records {
        builder.add_record(record);
    }
    builder.finish()
}

fn compare_edges(a: &Edge, b: &Edge) -> Ordering {
    compare_distance(a.weight, b.weight).then_with(|| compare_distance(a.travel_time, b.travel_time))
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(lon: f64, lat: f64) -> Vertex {
        Vertex::new(lon, lat)
    }

    #[test]
    fn two_way_segment_produces_both_directions() {
        let graph = build_graph(&[RoadRecord::new([(0.0, 0.0), (0.0, 1.0)])]);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        let forward = graph.edge(v(0.0, 0.0), v(0.0, 1.0)).expect("forward edge");
        let reverse = graph.edge(v(0.0, 1.0), v(0.0, 0.0)).expect("reverse edge");
        assert!((forward.weight - 111.19).abs() < 0.01);
        assert_eq!(forward.weight, reverse.weight);
        assert_eq!(forward.travel_time, reverse.travel_time);
        assert_eq!(&*forward.road_class, "unknown");
        assert_eq!(&*forward.name, "Unnamed");
    }

    #[test]
    fn oneway_suppresses_reverse_edge() {
        let record = RoadRecord::new([(0.0, 0.0), (0.0, 1.0)]).with_oneway("yes");
        let graph = build_graph(&[record]);

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edge(v(0.0, 0.0), v(0.0, 1.0)).unwrap().oneway);
        assert!(graph.edge(v(0.0, 1.0), v(0.0, 0.0)).is_none());
        assert!(graph.contains(v(0.0, 1.0)));
    }

    #[test]
    fn reverse_edge_is_never_oneway() {
        let record = RoadRecord::new([(0.0, 0.0), (1.0, 0.0)]).with_oneway("no");
        let graph = build_graph(&[record]);
        assert!(!graph.edge(v(1.0, 0.0), v(0.0, 0.0)).unwrap().oneway);
    }

    #[test]
    fn degenerate_records_are_skipped() {
        let records = [
            RoadRecord::default(),
            RoadRecord::new([(5.0, 5.0)]),
            RoadRecord::new([(0.0, 0.0), (0.0, 1.0)]),
        ];
        let graph = build_graph(&records);
        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.contains(v(5.0, 5.0)));
    }

    #[test]
    fn travel_time_uses_speed() {
        let record = RoadRecord::new([(0.0, 0.0), (0.0, 1.0)]).with_maxspeed("100 km/h");
        let graph = build_graph(&[record]);
        let edge = graph.edge(v(0.0, 0.0), v(0.0, 1.0)).unwrap();
        assert!((edge.travel_time - edge.weight / 100.0 * 60.0).abs() < 1e-12);
    }

    #[test]
    fn zero_speed_gives_infinite_time() {
        let record = RoadRecord::new([(0.0, 0.0), (0.0, 1.0)]).with_maxspeed(0.0);
        let graph = build_graph(&[record]);
        assert!(graph
            .edge(v(0.0, 0.0), v(0.0, 1.0))
            .unwrap()
            .travel_time
            .is_infinite());
    }

    #[test]
    fn enumeration_follows_first_appearance() {
        let records = [
            RoadRecord::new([(2.0, 0.0), (1.0, 0.0), (0.0, 0.0)]),
            RoadRecord::new([(1.0, 0.0), (1.0, 1.0)]),
        ];
        let graph = build_graph(&records);
        let order: Vec<_> = graph.vertices().collect();
        assert_eq!(order, vec![v(2.0, 0.0), v(1.0, 0.0), v(0.0, 0.0), v(1.0, 1.0)]);

        let targets: Vec<_> = graph
            .neighbours(v(1.0, 0.0))
            .iter()
            .map(|edge| edge.target)
            .collect();
        assert_eq!(targets, vec![v(2.0, 0.0), v(0.0, 0.0), v(1.0, 1.0)]);
    }

    #[test]
    fn parallel_edges_collapse_to_fastest() {
        let records = [
            RoadRecord::new([(0.0, 0.0), (0.0, 1.0)])
                .with_maxspeed(30.0)
                .with_name("Slow"),
            RoadRecord::new([(0.0, 0.0), (0.0, 1.0)])
                .with_maxspeed(90.0)
                .with_name("Fast"),
            RoadRecord::new([(0.0, 0.0), (0.0, 1.0)])
                .with_maxspeed(90.0)
                .with_name("Later"),
        ];
        let graph = build_graph(&records);

        assert_eq!(graph.edge_count(), 2);
        let edge = graph.edge(v(0.0, 0.0), v(0.0, 1.0)).unwrap();
        assert_eq!(&*edge.name, "Fast");
    }

    #[test]
    fn stats_and_path_sums() {
        let records = [
            RoadRecord::new([(0.0, 0.0), (0.0, 1.0)]).with_oneway("yes"),
            RoadRecord::new([(0.0, 1.0), (0.0, 2.0)]),
        ];
        let graph = build_graph(&records);
        let stats = graph.stats();
        assert_eq!(stats.vertices, 3);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.oneway_edges, 1);

        let path = [v(0.0, 0.0), v(0.0, 1.0), v(0.0, 2.0)];
        let length = graph.path_length_km(&path).unwrap();
        assert!((length - 2.0 * 111.194_926_644_558_73).abs() < 1e-6);
        assert!(graph.path_travel_time_min(&path).unwrap() > 0.0);
        assert!(graph.path_length_km(&[v(0.0, 1.0), v(0.0, 0.0)]).is_none());
        assert_eq!(graph.path_length_km(&[v(0.0, 0.0)]), Some(0.0));
    }

    #[test]
    fn empty_graph_has_no_neighbours() {
        let graph = Graph::default();
        assert!(graph.is_empty());
        assert!(graph.neighbours(v(0.0, 0.0)).is_empty());
        assert_eq!(graph.vertex_at(0), None);
    }
}
