//! Search strategies implementing the Strategy pattern.
//!
//! Each algorithm sits behind the [`SearchPlanner`] trait so the
//! orchestration in [`super::plan_search`] and [`super::compare_algorithms`]
//! never matches on the algorithm itself.

use crate::geo::Vertex;
use crate::graph::Graph;
use crate::path::{search_bfs, search_dfs, search_dijkstra, SearchResult};

use super::SearchAlgorithm;

/// Trait for search strategies.
pub trait SearchPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Run the search between two graph vertices.
    fn search(&self, graph: &Graph, start: Vertex, end: Vertex) -> SearchResult;

    /// Whether the returned path is minimal by weighted distance.
    fn is_weighted(&self) -> bool {
        false
    }
}

/// Breadth-first planner: fewest hops, ignores edge weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl SearchPlanner for BfsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Bfs
    }

    fn search(&self, graph: &Graph, start: Vertex, end: Vertex) -> SearchResult {
        search_bfs(graph, start, end)
    }
}

/// Depth-first planner: exploration order only, no optimality.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsPlanner;

impl SearchPlanner for DfsPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Dfs
    }

    fn search(&self, graph: &Graph, start: Vertex, end: Vertex) -> SearchResult {
        search_dfs(graph, start, end)
    }
}

/// Dijkstra planner: shortest path by great-circle kilometres.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl SearchPlanner for DijkstraPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Dijkstra
    }

    fn search(&self, graph: &Graph, start: Vertex, end: Vertex) -> SearchResult {
        search_dijkstra(graph, start, end)
    }

    fn is_weighted(&self) -> bool {
        true
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: SearchAlgorithm) -> Box<dyn SearchPlanner> {
    match algorithm {
        SearchAlgorithm::Bfs => Box::new(BfsPlanner),
        SearchAlgorithm::Dfs => Box::new(DfsPlanner),
        SearchAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_planner_matches_algorithm() {
        for algorithm in SearchAlgorithm::ALL {
            assert_eq!(select_planner(algorithm).algorithm(), algorithm);
        }
    }

    #[test]
    fn only_dijkstra_is_weighted() {
        assert!(!BfsPlanner.is_weighted());
        assert!(!DfsPlanner.is_weighted());
        assert!(DijkstraPlanner.is_weighted());
    }
}
