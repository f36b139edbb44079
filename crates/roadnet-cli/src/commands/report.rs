//! `report` subcommand: benchmark every algorithm over indexed vertex pairs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use roadnet_cli::output::{render_report, OutputFormat};
use roadnet_cli::terminal::ColorPalette;
use roadnet_lib::{benchmark_report, BenchmarkCase};

use super::{load_network, print_json};
use crate::ReportArgs;

pub fn handle_report(target: Option<&Path>, format: OutputFormat, args: &ReportArgs) -> Result<()> {
    let network = load_network(target)?;
    let cases = if args.cases.is_empty() {
        BenchmarkCase::defaults()
    } else {
        args.cases.clone()
    };

    let report = benchmark_report(&network.graph, &cases, network.load_time)?;

    if let Some(path) = args.output.as_deref() {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), cases = cases.len(), "wrote benchmark report");
    }

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            print!("{}", render_report(&report, &ColorPalette::detect()));
            if let Some(path) = args.output.as_deref() {
                println!("\nReport written to {}", path.display());
            }
            Ok(())
        }
    }
}
