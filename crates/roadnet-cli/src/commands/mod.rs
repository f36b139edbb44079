//! Subcommand handlers.
//!
//! `main.rs` parses arguments and dispatches here; each module owns one
//! subcommand.

pub mod compare;
pub mod info;
pub mod nearest;
pub mod report;
pub mod search;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use roadnet_lib::{load_road_network, resolve_dataset_path, Graph};

/// A loaded road network plus where it came from and how long loading took.
pub struct LoadedNetwork {
    pub path: PathBuf,
    pub graph: Graph,
    pub load_time: Duration,
}

/// Resolve the dataset path and build the graph.
pub fn load_network(target: Option<&Path>) -> Result<LoadedNetwork> {
    let path = resolve_dataset_path(target).context("failed to locate the road dataset")?;
    let started = Instant::now();
    let graph = load_road_network(&path)
        .with_context(|| format!("failed to load road dataset from {}", path.display()))?;
    Ok(LoadedNetwork {
        path,
        graph,
        load_time: started.elapsed(),
    })
}

/// Serialize `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
