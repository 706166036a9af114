//! # Rank Subcommand
//!
//! Every other node ordered by its cost from one origin.

use anyhow::{Context, Result};
use clap::Args;

use rota_core::{Metric, NodeId};
use rota_engine::SelectionStrategy;

use crate::render;
use crate::source::GraphArgs;
use crate::{CliContext, OutputFormat};

/// Arguments for `rota rank`.
#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub source: GraphArgs,

    /// Origin node id.
    #[arg(long)]
    pub from: NodeId,

    /// Metric to minimize.
    #[arg(long)]
    pub criterion: Option<Metric>,

    /// Node selection strategy: "scan" or "heap".
    #[arg(long)]
    pub strategy: Option<SelectionStrategy>,
}

/// Execute `rota rank`.
pub fn run_rank(args: &RankArgs, ctx: &CliContext) -> Result<u8> {
    let graph = args.source.load()?;
    let criterion = ctx.criterion(args.criterion.as_ref());

    let routes = ctx
        .planner(&graph, args.strategy)
        .rank_destinations(&args.from, &criterion)
        .with_context(|| format!("cannot rank destinations from {}", args.from))?;

    let output = match ctx.format {
        OutputFormat::Text => render::rank_text(&graph, &routes),
        OutputFormat::Json => render::json(&routes)?,
    };
    println!("{output}");
    Ok(0)
}
