//! # Route Subcommand
//!
//! Best route between two nodes. With `--explain` the engine's traversal is
//! narrated before the route.

use anyhow::{Context, Result};
use clap::Args;

use rota_core::{Metric, NodeId};
use rota_engine::{RouteExplanation, SelectionStrategy};

use crate::render;
use crate::source::GraphArgs;
use crate::{CliContext, OutputFormat, EXIT_UNREACHABLE};

/// Arguments for `rota route`.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    #[command(flatten)]
    pub source: GraphArgs,

    /// Origin node id.
    #[arg(long)]
    pub from: NodeId,

    /// Destination node id.
    #[arg(long)]
    pub to: NodeId,

    /// Metric to minimize (e.g. "time", "distance").
    #[arg(long)]
    pub criterion: Option<Metric>,

    /// Node selection strategy: "scan" or "heap".
    #[arg(long)]
    pub strategy: Option<SelectionStrategy>,

    /// Narrate every step of the search.
    #[arg(long)]
    pub explain: bool,
}

/// Execute `rota route`.
pub fn run_route(args: &RouteArgs, ctx: &CliContext) -> Result<u8> {
    let graph = args.source.load()?;
    let criterion = ctx.criterion(args.criterion.as_ref());
    let planner = ctx.planner(&graph, args.strategy);

    let result = if args.explain {
        planner.explain_route(&args.from, &args.to, &criterion)
    } else {
        planner
            .find_route(&args.from, &args.to, &criterion)
            .map(|route| RouteExplanation {
                route,
                trace: Vec::new(),
            })
    };
    let explanation =
        result.with_context(|| format!("cannot route {} -> {}", args.from, args.to))?;

    let output = match (ctx.format, args.explain) {
        (OutputFormat::Json, true) => render::json(&explanation)?,
        (OutputFormat::Json, false) => render::json(&explanation.route)?,
        (OutputFormat::Text, true) => render::explanation_text(&graph, &explanation),
        (OutputFormat::Text, false) => render::route_text(&graph, &explanation.route),
    };
    println!("{output}");

    if explanation.route.is_reachable() {
        Ok(0)
    } else {
        tracing::info!(from = %args.from, to = %args.to, "destination unreachable");
        Ok(EXIT_UNREACHABLE)
    }
}
