//! Output formatting for CLI results.
//!
//! Text renderers return `String`s so they can be unit tested; the command
//! handlers decide where the text goes.

use std::fmt::Write;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use roadnet_lib::{
    AlgorithmRun, BenchmarkReport, Comparison, GraphStats, SearchPlan, SearchSummary, Vertex,
};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// JSON document emitted by `search --format json`.
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub start: [f64; 2],
    pub end: [f64; 2],
    #[serde(flatten)]
    pub summary: SearchSummary,
    pub elapsed_ms: f64,
}

impl SearchOutput {
    pub fn from_plan(plan: &SearchPlan) -> Self {
        Self {
            start: plan.start.as_lat_lon(),
            end: plan.end.as_lat_lon(),
            summary: SearchSummary::from_result(plan.algorithm, &plan.result),
            elapsed_ms: plan.elapsed_ms(),
        }
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: Duration) {
    let palette = ColorPalette::detect();
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{}Completed in {}{}", palette.muted, time_str, palette.reset);
}

fn coordinate(vertex: Vertex, palette: &ColorPalette) -> String {
    format!(
        "{}{:.6}, {:.6}{}",
        palette.coordinate,
        vertex.lat(),
        vertex.lon(),
        palette.reset
    )
}

pub fn render_info(path: &Path, stats: &GraphStats, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}Road network{} {}",
        palette.heading,
        palette.reset,
        path.display()
    );
    let _ = writeln!(out, "  Vertices:      {}", format_with_separators(stats.vertices as u64));
    let _ = writeln!(out, "  Edges:         {}", format_with_separators(stats.edges as u64));
    let _ = writeln!(
        out,
        "  One-way edges: {}",
        format_with_separators(stats.oneway_edges as u64)
    );
    let _ = writeln!(out, "  Total length:  {:.2} km", stats.total_length_km);
    out
}

pub fn render_nearest(vertex: Vertex, palette: &ColorPalette) -> String {
    format!("Nearest vertex: {} (lat, lon)\n", coordinate(vertex, palette))
}

pub fn render_search(plan: &SearchPlan, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let result = &plan.result;
    let _ = writeln!(
        out,
        "{}{}{} search from {} to {}",
        palette.heading,
        plan.algorithm,
        palette.reset,
        coordinate(plan.start, palette),
        coordinate(plan.end, palette)
    );

    if !result.found {
        let _ = writeln!(
            out,
            "{}no path found{} ({} vertices visited)",
            palette.missing,
            palette.reset,
            format_with_separators(result.visited_count() as u64)
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{}Path{} ({} vertices, {} hops):",
        palette.found,
        palette.reset,
        result.path_len(),
        result.hop_count()
    );
    for (index, vertex) in result.path.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}{:>4}.{} {}",
            palette.muted,
            index + 1,
            palette.reset,
            coordinate(*vertex, palette)
        );
    }
    let _ = writeln!(out, "\nDistance: {:.2} km", result.distance);
    let _ = writeln!(
        out,
        "Visited:  {} vertices",
        format_with_separators(result.visited_count() as u64)
    );
    out
}

fn render_runs(out: &mut String, runs: &[AlgorithmRun], palette: &ColorPalette) {
    let _ = writeln!(
        out,
        "{}{:<10} {:<6} {:>14} {:>6} {:>9} {:>10}{}",
        palette.heading, "Algorithm", "Found", "Distance (km)", "Path", "Visited", "Time (ms)", palette.reset
    );
    for run in runs {
        let (found, distance, path) = if run.found {
            (
                format!("{}yes{}", palette.found, palette.reset),
                format!("{:.2}", run.distance_km),
                run.path_length.to_string(),
            )
        } else {
            (
                format!("{}no{} ", palette.missing, palette.reset),
                "N/A".to_string(),
                "N/A".to_string(),
            )
        };
        let _ = writeln!(
            out,
            "{:<10} {:<6} {:>14} {:>6} {:>9} {:>10.3}",
            run.algorithm.as_str(),
            found,
            distance,
            path,
            run.visited_count,
            run.elapsed_ms
        );
    }
}

pub fn render_comparison(comparison: &Comparison, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Comparing algorithms from {} to {}\n",
        coordinate(comparison.start, palette),
        coordinate(comparison.end, palette)
    );
    render_runs(&mut out, &comparison.runs, palette);

    match comparison.shortest() {
        Some(shortest) => {
            let _ = writeln!(
                out,
                "\nShortest: {}{}{}",
                palette.highlight, shortest, palette.reset
            );
        }
        None => {
            let _ = writeln!(out, "\n{}no path found{}", palette.missing, palette.reset);
        }
    }
    if let Some(fastest) = comparison.fastest() {
        let _ = writeln!(out, "Fastest: {}{}{}", palette.highlight, fastest, palette.reset);
    }
    if let Some(fewest) = comparison.fewest_visited() {
        let _ = writeln!(
            out,
            "Fewest visited: {}{}{}",
            palette.highlight, fewest, palette.reset
        );
    }
    out
}

pub fn render_report(report: &BenchmarkReport, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let info = &report.graph_info;
    let _ = writeln!(
        out,
        "{}Graph{}: {} vertices, {} edges, loaded in {:.2} ms",
        palette.heading,
        palette.reset,
        format_with_separators(info.nodes as u64),
        format_with_separators(info.edges as u64),
        info.load_time_ms
    );

    for test in &report.tests {
        let _ = writeln!(
            out,
            "\n{}Test {}{} (vertex {} -> vertex {}): {} to {}",
            palette.heading,
            test.number,
            palette.reset,
            test.case.start_index,
            test.case.end_index,
            coordinate(test.start, palette),
            coordinate(test.end, palette)
        );
        render_runs(&mut out, &test.results, palette);
    }
    out
}
