//! Graph selection shared by every subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rota_graph::{samples, Graph, GraphDocument};

/// Where the graph comes from: a document on disk or a built-in sample.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct GraphArgs {
    /// Path to a YAML or JSON graph document.
    #[arg(long)]
    pub graph: Option<PathBuf>,

    /// Built-in sample graph.
    #[arg(long, value_parser = samples::SAMPLE_NAMES)]
    pub sample: Option<String>,
}

impl GraphArgs {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            graph: Some(path.into()),
            sample: None,
        }
    }

    pub fn from_sample(name: &str) -> Self {
        Self {
            graph: None,
            sample: Some(name.to_string()),
        }
    }

    /// Load and validate the selected graph.
    pub fn load(&self) -> Result<Graph> {
        let graph = match (&self.graph, &self.sample) {
            (Some(path), _) => GraphDocument::load(path)
                .and_then(GraphDocument::into_graph)
                .with_context(|| format!("failed to load graph from {}", path.display()))?,
            (None, Some(name)) => samples::by_name(name)
                .context("invalid built-in sample")?
                .with_context(|| format!("unknown sample graph: {name}"))?,
            (None, None) => anyhow::bail!("either --graph or --sample is required"),
        };
        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_named_sample() {
        let graph = GraphArgs::from_sample("delivery").load().unwrap();
        assert_eq!(graph.node_count(), 9);
    }

    #[test]
    fn unknown_sample_is_an_error() {
        let err = GraphArgs::from_sample("atlantis").load().unwrap_err();
        assert!(format!("{err:#}").contains("atlantis"));
    }

    #[test]
    fn loads_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.yaml");
        std::fs::write(&path, "edges:\n  - { from: A, to: B, weights: { weight: 1 } }\n").unwrap();
        let graph = GraphArgs::from_file(&path).load().unwrap();
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn bad_document_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "edges:\n  - { from: A, to: B, weights: { weight: -1 } }\n").unwrap();
        let err = GraphArgs::from_file(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("broken.yaml"));
    }
}
