//! # Nodes Subcommand
//!
//! Lists the nodes of a graph with their labels and out-degree.

use anyhow::Result;
use clap::Args;

use crate::render;
use crate::source::GraphArgs;
use crate::{CliContext, OutputFormat};

/// Arguments for `rota nodes`.
#[derive(Args, Debug, Clone)]
pub struct NodesArgs {
    #[command(flatten)]
    pub source: GraphArgs,
}

/// Execute `rota nodes`.
pub fn run_nodes(args: &NodesArgs, ctx: &CliContext) -> Result<u8> {
    let graph = args.source.load()?;
    let output = match ctx.format {
        OutputFormat::Text => render::nodes_text(&graph),
        OutputFormat::Json => render::json(&render::node_views(&graph))?,
    };
    println!("{output}");
    Ok(0)
}
