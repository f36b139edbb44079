//! `compare` subcommand: run every algorithm on the same endpoints.

use std::path::Path;

use anyhow::Result;

use roadnet_cli::output::{render_comparison, OutputFormat};
use roadnet_cli::terminal::ColorPalette;
use roadnet_lib::compare_coordinates;

use super::{load_network, print_json};
use crate::EndpointArgs;

pub fn handle_compare(target: Option<&Path>, format: OutputFormat, args: &EndpointArgs) -> Result<()> {
    let network = load_network(target)?;
    let comparison = compare_coordinates(&network.graph, args.start(), args.end())?;

    match format {
        OutputFormat::Json => print_json(&comparison),
        OutputFormat::Text => {
            print!("{}", render_comparison(&comparison, &ColorPalette::detect()));
            Ok(())
        }
    }
}
