//! `info` subcommand: graph statistics.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use roadnet_cli::output::{render_info, OutputFormat};
use roadnet_cli::terminal::ColorPalette;
use roadnet_lib::GraphStats;

use super::{load_network, print_json};

#[derive(Serialize)]
struct InfoOutput<'a> {
    path: &'a Path,
    #[serde(flatten)]
    stats: GraphStats,
}

pub fn handle_info(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let network = load_network(target)?;
    let stats = network.graph.stats();

    match format {
        OutputFormat::Json => print_json(&InfoOutput {
            path: &network.path,
            stats,
        }),
        OutputFormat::Text => {
            print!("{}", render_info(&network.path, &stats, &ColorPalette::detect()));
            Ok(())
        }
    }
}
