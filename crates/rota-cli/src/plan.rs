//! # Plan Subcommand
//!
//! Routes from one origin to several destinations computed from a single
//! search, followed by the delivery summary.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use rota_core::{Metric, NodeId};
use rota_engine::{PlanSummary, RouteResult, SelectionStrategy};

use crate::render;
use crate::source::GraphArgs;
use crate::{CliContext, OutputFormat};

/// Arguments for `rota plan`.
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub source: GraphArgs,

    /// Origin node id.
    #[arg(long)]
    pub from: NodeId,

    /// Destination node ids, comma-separated or repeated.
    #[arg(long, value_delimiter = ',', required = true)]
    pub to: Vec<NodeId>,

    /// Metric to minimize.
    #[arg(long)]
    pub criterion: Option<Metric>,

    /// Node selection strategy: "scan" or "heap".
    #[arg(long)]
    pub strategy: Option<SelectionStrategy>,
}

/// JSON shape of a plan.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub routes: Vec<RouteResult>,
    pub summary: PlanSummary,
}

/// Execute `rota plan`.
///
/// Unreachable or unknown destinations are reported in the output; the
/// command still succeeds.
pub fn run_plan(args: &PlanArgs, ctx: &CliContext) -> Result<u8> {
    let graph = args.source.load()?;
    let criterion = ctx.criterion(args.criterion.as_ref());

    let routes = ctx
        .planner(&graph, args.strategy)
        .plan_routes(&args.from, &args.to, &criterion)
        .with_context(|| format!("cannot plan routes from {}", args.from))?;
    let summary = PlanSummary::from_routes(&routes);

    let output = match ctx.format {
        OutputFormat::Text => render::plan_text(&graph, &routes, &summary),
        OutputFormat::Json => render::json(&PlanReport { routes, summary })?,
    };
    println!("{output}");
    Ok(0)
}
