mod commands;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadnet_cli::output::{print_footer, OutputFormat};
use roadnet_lib::{BenchmarkCase, LatLon, SearchAlgorithm};

#[derive(Parser, Debug)]
#[command(author, version, about = "Road network search and benchmarking utilities")]
struct Cli {
    /// Path to the GeoJSON road dataset.
    #[arg(long, global = true, env = "ROADNET_DATA_PATH")]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report vertex and edge counts for the dataset.
    Info,
    /// Snap a coordinate onto the closest graph vertex.
    Nearest(NearestArgs),
    /// Search for a path between two coordinates.
    Search(SearchArgs),
    /// Run BFS, DFS, and Dijkstra between two coordinates and compare them.
    Compare(EndpointArgs),
    /// Benchmark every algorithm over vertex-index test cases.
    Report(ReportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct NearestArgs {
    /// Latitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
}

#[derive(Args, Debug, Clone)]
pub struct EndpointArgs {
    /// Start latitude in degrees.
    #[arg(long = "from-lat", allow_negative_numbers = true)]
    pub from_lat: f64,
    /// Start longitude in degrees.
    #[arg(long = "from-lon", allow_negative_numbers = true)]
    pub from_lon: f64,
    /// Destination latitude in degrees.
    #[arg(long = "to-lat", allow_negative_numbers = true)]
    pub to_lat: f64,
    /// Destination longitude in degrees.
    #[arg(long = "to-lon", allow_negative_numbers = true)]
    pub to_lon: f64,
}

impl EndpointArgs {
    pub fn start(&self) -> LatLon {
        LatLon::new(self.from_lat, self.from_lon)
    }

    pub fn end(&self) -> LatLon {
        LatLon::new(self.to_lat, self.to_lon)
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub endpoints: EndpointArgs,
    /// Search algorithm: bfs, dfs, or dijkstra.
    #[arg(long, default_value = "dijkstra")]
    pub algorithm: SearchAlgorithm,
    /// Also write the path and visited vertices as GeoJSON.
    #[arg(long)]
    pub geojson: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Write the JSON report to this file.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Test case as START:END vertex indices; repeatable. Defaults to 0:10, 0:50, 0:100.
    #[arg(long = "case")]
    pub cases: Vec<BenchmarkCase>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let started = Instant::now();
    let target = cli.data.as_deref();

    match &cli.command {
        Command::Info => commands::info::handle_info(target, cli.format)?,
        Command::Nearest(args) => commands::nearest::handle_nearest(target, cli.format, args)?,
        Command::Search(args) => commands::search::handle_search(target, cli.format, args)?,
        Command::Compare(args) => commands::compare::handle_compare(target, cli.format, args)?,
        Command::Report(args) => commands::report::handle_report(target, cli.format, args)?,
    }

    if cli.format == OutputFormat::Text {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
