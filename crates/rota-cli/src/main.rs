//! # rota CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rota_cli::config::RotaConfig;
use rota_cli::nodes::{run_nodes, NodesArgs};
use rota_cli::plan::{run_plan, PlanArgs};
use rota_cli::rank::{run_rank, RankArgs};
use rota_cli::route::{run_route, RouteArgs};
use rota_cli::{CliContext, OutputFormat};

/// rota — shortest routes over weighted graphs
///
/// Finds minimal-cost routes under a chosen metric (time, distance, ...),
/// plans several deliveries from one origin, and ranks destinations.
#[derive(Parser, Debug)]
#[command(name = "rota", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Best route between two nodes.
    Route(RouteArgs),

    /// Routes from one origin to several destinations.
    Plan(PlanArgs),

    /// All destinations from one origin, cheapest first.
    Rank(RankArgs),

    /// List the nodes of a graph.
    Nodes(NodesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("rota CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match RotaConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(?config, "resolved configuration");
    let ctx = CliContext::new(config, cli.format);

    let result = match &cli.command {
        Commands::Route(args) => run_route(args, &ctx),
        Commands::Plan(args) => run_plan(args, &ctx),
        Commands::Rank(args) => run_rank(args, &ctx),
        Commands::Nodes(args) => run_nodes(args, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
