//! `search` subcommand: run one algorithm between two coordinates.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use roadnet_cli::output::{render_search, OutputFormat, SearchOutput};
use roadnet_cli::terminal::ColorPalette;
use roadnet_lib::{plan_search, search_to_geojson, SearchRequest, VISITED_RESPONSE_LIMIT};

use super::{load_network, print_json};
use crate::SearchArgs;

/// Handle the search subcommand.
///
/// A search that finds no path is still a successful run.
pub fn handle_search(target: Option<&Path>, format: OutputFormat, args: &SearchArgs) -> Result<()> {
    let network = load_network(target)?;
    let request = SearchRequest::new(args.endpoints.start(), args.endpoints.end(), args.algorithm);
    let plan = plan_search(&network.graph, &request)?;

    if let Some(path) = args.geojson.as_deref() {
        let collection = search_to_geojson(&plan.result, VISITED_RESPONSE_LIMIT);
        let json = serde_json::to_string_pretty(&collection).context("failed to encode GeoJSON")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write GeoJSON to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote search GeoJSON");
    }

    match format {
        OutputFormat::Json => print_json(&SearchOutput::from_plan(&plan)),
        OutputFormat::Text => {
            print!("{}", render_search(&plan, &ColorPalette::detect()));
            Ok(())
        }
    }
}
