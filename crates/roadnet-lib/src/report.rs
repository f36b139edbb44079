//! Benchmark report comparing every algorithm across a set of vertex pairs.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::Vertex;
use crate::graph::Graph;
use crate::output::round2;
use crate::routing::{compare_algorithms, AlgorithmRun};

/// One benchmark case, addressed by vertex enumeration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkCase {
    pub start_index: usize,
    pub end_index: usize,
}

impl BenchmarkCase {
    pub const fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// Short, medium, and long cases: vertex 0 to vertices 10, 50, and 100.
    pub fn defaults() -> Vec<BenchmarkCase> {
        vec![Self::new(0, 10), Self::new(0, 50), Self::new(0, 100)]
    }

    /// Clamp both indices to the last vertex of a graph with `vertex_count` vertices.
    fn clamped(self, vertex_count: usize) -> Self {
        let last = vertex_count.saturating_sub(1);
        Self::new(self.start_index.min(last), self.end_index.min(last))
    }
}

impl fmt::Display for BenchmarkCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_index, self.end_index)
    }
}

impl FromStr for BenchmarkCase {
    type Err = String;

    /// Parse `START:END`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| format!("expected START:END, got '{s}'"))?;
        let start = start
            .trim()
            .parse()
            .map_err(|_| format!("invalid start index '{start}'"))?;
        let end = end
            .trim()
            .parse()
            .map_err(|_| format!("invalid end index '{end}'"))?;
        Ok(Self::new(start, end))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphInfo {
    pub nodes: usize,
    pub edges: usize,
    pub load_time_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub number: usize,
    pub case: BenchmarkCase,
    pub start: Vertex,
    pub end: Vertex,
    pub results: Vec<AlgorithmRun>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub graph_info: GraphInfo,
    pub tests: Vec<CaseReport>,
}

/// Run every algorithm for each case and collect the results.
///
/// Case indices beyond the last vertex are clamped to it. Distances and
/// timings are rounded to two decimals.
pub fn benchmark_report(
    graph: &Graph,
    cases: &[BenchmarkCase],
    load_time: Duration,
) -> Result<BenchmarkReport> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }

    let vertex_count = graph.vertex_count();
    let mut tests = Vec::with_capacity(cases.len());

    for (offset, case) in cases.iter().enumerate() {
        let case = case.clamped(vertex_count);
        let (Some(start), Some(end)) = (graph.vertex_at(case.start_index), graph.vertex_at(case.end_index))
        else {
            return Err(Error::EmptyGraph);
        };

        tracing::debug!(%case, %start, %end, "running benchmark case");
        let comparison = compare_algorithms(graph, start, end);
        let results = comparison
            .runs
            .into_iter()
            .map(|run| AlgorithmRun {
                distance_km: round2(run.distance_km),
                elapsed_ms: round2(run.elapsed_ms),
                ..run
            })
            .collect();

        tests.push(CaseReport {
            number: offset + 1,
            case,
            start,
            end,
            results,
        });
    }

    Ok(BenchmarkReport {
        graph_info: GraphInfo {
            nodes: vertex_count,
            edges: graph.edge_count(),
            load_time_ms: round2(load_time.as_secs_f64() * 1000.0),
        },
        tests,
    })
}
