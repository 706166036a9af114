//! # rota-cli — Command-Line Route Planner
//!
//! Provides the `rota` binary.
//!
//! ## Subcommands
//!
//! - `rota route` — Best route between two nodes, optionally narrated.
//! - `rota plan` — Routes from one origin to several destinations, with a
//!   total and mean cost.
//! - `rota rank` — Every destination from one origin, cheapest first.
//! - `rota nodes` — Node listing.
//!
//! Every subcommand takes its graph from `--graph FILE` (YAML or JSON) or
//! `--sample NAME`:
//!
//! ```bash
//! rota route --sample delivery --from CD --to HO --criterion time --explain
//! rota plan --graph city.yaml --from CD --to R1,R4,HO
//! rota --format json rank --sample streets --from "Av. Paulista, 1000" --criterion distance
//! ```
//!
//! ## Exit codes
//!
//! `0` on success, `2` when a single requested route is unreachable, `1`
//! on any error.

pub mod config;
pub mod nodes;
pub mod plan;
pub mod rank;
pub mod render;
pub mod route;
pub mod source;

use clap::ValueEnum;

use rota_core::Metric;
use rota_engine::{RoutePlanner, SelectionStrategy};
use rota_graph::Graph;

use crate::config::RotaConfig;

/// Exit code for an unreachable single route.
pub const EXIT_UNREACHABLE: u8 = 2;

/// Output format of every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// State shared by the subcommand handlers.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    pub config: RotaConfig,
    pub format: OutputFormat,
}

impl CliContext {
    pub fn new(config: RotaConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// The `--criterion` flag if given, else the configured default.
    pub fn criterion(&self, flag: Option<&Metric>) -> Metric {
        flag.cloned()
            .unwrap_or_else(|| self.config.default_criterion.clone())
    }

    /// Planner over `graph` using the `--strategy` flag or configured
    /// strategy and the configured reported metrics.
    pub fn planner<'g>(
        &self,
        graph: &'g Graph,
        strategy: Option<SelectionStrategy>,
    ) -> RoutePlanner<'g> {
        let planner =
            RoutePlanner::new(graph).with_strategy(strategy.unwrap_or(self.config.strategy));
        match &self.config.reported_metrics {
            Some(metrics) => planner.with_reported_metrics(metrics.iter().cloned()),
            None => planner,
        }
    }
}
