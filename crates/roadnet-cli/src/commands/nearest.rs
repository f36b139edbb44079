//! `nearest` subcommand: snap a coordinate onto the graph.

use std::path::Path;

use anyhow::Result;

use roadnet_cli::output::{render_nearest, OutputFormat};
use roadnet_cli::terminal::ColorPalette;
use roadnet_lib::LatLon;

use super::{load_network, print_json};
use crate::NearestArgs;

pub fn handle_nearest(target: Option<&Path>, format: OutputFormat, args: &NearestArgs) -> Result<()> {
    let network = load_network(target)?;
    let vertex = LatLon::new(args.lat, args.lon).snap(&network.graph)?;

    match format {
        OutputFormat::Json => print_json(&vertex),
        OutputFormat::Text => {
            print!("{}", render_nearest(vertex, &ColorPalette::detect()));
            Ok(())
        }
    }
}
