use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use serde::Serialize;

use crate::geo::Vertex;
use crate::graph::Graph;

/// Outcome shared by every search algorithm.
///
/// `visited` lists vertices in the order they were finalized, which is the
/// order visualisation consumers replay. `distance` is the sum of edge
/// weights along `path` (kilometres) and is `0` when nothing was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub path: Vec<Vertex>,
    pub visited: Vec<Vertex>,
    pub distance: f64,
    pub found: bool,
}

impl SearchResult {
    /// Result for an endpoint that is not part of the graph.
    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            visited: Vec::new(),
            distance: 0.0,
            found: false,
        }
    }

    fn exhausted(visited: Vec<Vertex>) -> Self {
        Self {
            visited,
            ..Self::not_found()
        }
    }

    fn reached(path: Vec<Vertex>, visited: Vec<Vertex>, distance: f64) -> Self {
        Self {
            path,
            visited,
            distance,
            found: true,
        }
    }

    /// Number of vertices in the path.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of edges in the path.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Frontier entry: a candidate vertex and the finalized vertex whose
/// expansion produced it.
#[derive(Copy, Clone, Debug)]
struct FrontierEntry {
    vertex: Vertex,
    parent: Option<Vertex>,
}

impl FrontierEntry {
    fn seed(vertex: Vertex) -> Self {
        Self {
            vertex,
            parent: None,
        }
    }
}

/// Finalized vertices mapped to their parent. Recording the parent of the
/// entry that finalized a vertex reproduces exactly the path that entry
/// would have carried.
type Parents = HashMap<Vertex, Option<Vertex>>;

fn endpoints_present(graph: &Graph, start: Vertex, end: Vertex) -> bool {
    graph.contains(start) && graph.contains(end)
}

/// Breadth-first search. The first path found has the fewest hops.
pub fn search_bfs(graph: &Graph, start: Vertex, end: Vertex) -> SearchResult {
    if !endpoints_present(graph, start, end) {
        return SearchResult::not_found();
    }

    let mut parents = Parents::new();
    let mut visited = Vec::new();
    let mut queue = VecDeque::from([FrontierEntry::seed(start)]);

    while let Some(entry) = queue.pop_front() {
        if parents.contains_key(&entry.vertex) {
            continue;
        }
        parents.insert(entry.vertex, entry.parent);
        visited.push(entry.vertex);

        if entry.vertex == end {
            return summed_result(graph, &parents, end, visited);
        }

        for edge in graph.neighbours(entry.vertex) {
            if !parents.contains_key(&edge.target) {
                queue.push_back(FrontierEntry {
                    vertex: edge.target,
                    parent: Some(entry.vertex),
                });
            }
        }
    }

    SearchResult::exhausted(visited)
}

/// Depth-first search. Neighbours are pushed in reverse so the graph's first
/// neighbour is explored next.
pub fn search_dfs(graph: &Graph, start: Vertex, end: Vertex) -> SearchResult {
    if !endpoints_present(graph, start, end) {
        return SearchResult::not_found();
    }

    let mut parents = Parents::new();
    let mut visited = Vec::new();
    let mut stack = vec![FrontierEntry::seed(start)];

    while let Some(entry) = stack.pop() {
        if parents.contains_key(&entry.vertex) {
            continue;
        }
        parents.insert(entry.vertex, entry.parent);
        visited.push(entry.vertex);

        if entry.vertex == end {
            return summed_result(graph, &parents, end, visited);
        }

        for edge in graph.neighbours(entry.vertex).iter().rev() {
            if !parents.contains_key(&edge.target) {
                stack.push(FrontierEntry {
                    vertex: edge.target,
                    parent: Some(entry.vertex),
                });
            }
        }
    }

    SearchResult::exhausted(visited)
}

/// Dijkstra's algorithm over edge weights (kilometres).
///
/// Relies on every edge weight being non-negative, which the graph builder
/// guarantees. The reported distance is the accumulated queue key rather
/// than a re-summation of the path.
pub fn search_dijkstra(graph: &Graph, start: Vertex, end: Vertex) -> SearchResult {
    if !endpoints_present(graph, start, end) {
        return SearchResult::not_found();
    }

    let mut distances: HashMap<Vertex, f64> = HashMap::from([(start, 0.0)]);
    let mut parents = Parents::new();
    let mut visited = Vec::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    queue.push(QueueEntry::new(FrontierEntry::seed(start), 0.0, sequence));

    while let Some(QueueEntry { entry, cost, .. }) = queue.pop() {
        if parents.contains_key(&entry.vertex) {
            continue;
        }
        parents.insert(entry.vertex, entry.parent);
        visited.push(entry.vertex);

        if entry.vertex == end {
            let path = reconstruct_path(&parents, end);
            return SearchResult::reached(path, visited, cost.0);
        }

        for edge in graph.neighbours(entry.vertex) {
            let next = edge.target;
            if parents.contains_key(&next) {
                continue;
            }

            let candidate = cost.0 + edge.weight;
            let improves = distances.get(&next).map_or(true, |known| candidate < *known);
            if improves {
                distances.insert(next, candidate);
                sequence += 1;
                queue.push(QueueEntry::new(
                    FrontierEntry {
                        vertex: next,
                        parent: Some(entry.vertex),
                    },
                    candidate,
                    sequence,
                ));
            }
        }
    }

    SearchResult::exhausted(visited)
}

fn summed_result(graph: &Graph, parents: &Parents, end: Vertex, visited: Vec<Vertex>) -> SearchResult {
    let path = reconstruct_path(parents, end);
    // Every hop in a reconstructed path was expanded from a real edge.
    let distance = graph.path_length_km(&path).unwrap_or(0.0);
    SearchResult::reached(path, visited, distance)
}

fn reconstruct_path(parents: &Parents, end: Vertex) -> Vec<Vertex> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(vertex) = current {
        path.push(vertex);
        current = parents.get(&vertex).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug)]
struct QueueEntry {
    entry: FrontierEntry,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(entry: FrontierEntry, cost: f64, sequence: u64) -> Self {
        Self {
            entry,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by
        // (cost, vertex, insertion order).
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.entry.vertex.cmp(&self.entry.vertex))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
