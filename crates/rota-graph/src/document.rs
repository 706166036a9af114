//! # Graph Documents
//!
//! Declarative description of a graph, read from YAML or JSON:
//!
//! ```yaml
//! nodes:
//!   - id: CD
//!     label: Distribution center
//! edges:
//!   - from: CD
//!     to: PC
//!     weights: { time: 5 }
//!   - from: PC
//!     to: R1
//!     weights: { time: 7 }
//!     directed: true
//! ```
//!
//! Ids, metric names and weights are kept as raw strings and numbers until
//! [`GraphDocument::into_graph`], which validates them and reports failures
//! as [`DocumentError::Validation`]. Nodes referenced only by edges are
//! created without a label.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rota_core::{NodeId, WeightBundle};

use crate::error::{DocumentError, DocumentResult};
use crate::graph::Graph;

/// A node entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    /// Node identifier.
    pub id: String,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// An edge entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    /// Source node.
    pub from: String,
    /// Target node.
    pub to: String,
    /// Metric name → non-negative value.
    pub weights: BTreeMap<String, f64>,
    /// One-way edge when `true`; bidirectional otherwise.
    #[serde(default)]
    pub directed: bool,
}

/// A whole graph description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> DocumentResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a document from disk.
    ///
    /// Files ending in `.json` are parsed as JSON; everything else as YAML.
    pub fn load(path: &Path) -> DocumentResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocumentError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DocumentError::Io(e)
            }
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let document: Self = if is_json {
            serde_json::from_str(&content).map_err(|e| DocumentError::JsonParse {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| DocumentError::YamlParse {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        tracing::debug!(
            path = %path.display(),
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "loaded graph document"
        );
        Ok(document)
    }

    /// Build the graph, validating every id, metric name, and weight.
    ///
    /// Nodes are added before edges, so labels declared in `nodes` apply
    /// even when an edge mentions the node first in the file.
    pub fn into_graph(self) -> DocumentResult<Graph> {
        let mut graph = Graph::new();

        for node in self.nodes {
            graph.add_node(NodeId::new(node.id)?, node.label);
        }

        for edge in self.edges {
            let from = NodeId::new(edge.from)?;
            let to = NodeId::new(edge.to)?;
            let weights = WeightBundle::try_from(edge.weights)?;
            if edge.directed {
                graph.add_directed_edge(from, to, weights);
            } else {
                graph.add_edge(from, to, weights);
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY_YAML: &str = r#"
nodes:
  - id: CD
    label: Distribution center
  - id: PC
    label: Gas station
edges:
  - from: CD
    to: PC
    weights: { time: 5 }
  - from: PC
    to: R1
    weights: { time: 7, distance: 2.5 }
    directed: true
"#;

    #[test]
    fn yaml_document_builds_graph() {
        let graph = GraphDocument::from_yaml_str(CITY_YAML)
            .unwrap()
            .into_graph()
            .unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node_name("CD"), "Distribution center");
        assert_eq!(graph.node_name("R1"), "R1");
        assert!(graph.edge("PC", "CD").is_some());
        assert!(graph.edge("R1", "PC").is_none());
        assert_eq!(
            graph.edge("PC", "R1").and_then(|w| w.get("distance")),
            Some(2.5)
        );
    }

    #[test]
    fn json_document_builds_graph() {
        let json = r#"{
            "nodes": [{"id": "A"}],
            "edges": [{"from": "A", "to": "B", "weights": {"weight": 4}}]
        }"#;
        let graph = GraphDocument::from_json_str(json)
            .unwrap()
            .into_graph()
            .unwrap();
        assert_eq!(graph.edge("B", "A").and_then(|w| w.get("weight")), Some(4.0));
    }

    #[test]
    fn negative_weight_is_a_validation_error() {
        let yaml = "edges:\n  - { from: A, to: B, weights: { time: -2 } }\n";
        let err = GraphDocument::from_yaml_str(yaml)
            .unwrap()
            .into_graph()
            .unwrap_err();
        assert!(matches!(err, DocumentError::Validation(_)));
    }

    #[test]
    fn blank_node_id_is_a_validation_error() {
        let yaml = "nodes:\n  - id: \"  \"\n";
        let err = GraphDocument::from_yaml_str(yaml)
            .unwrap()
            .into_graph()
            .unwrap_err();
        assert!(matches!(err, DocumentError::Validation(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = "edges:\n  - { from: A, to: B, weights: { time: 2 }, oneway: true }\n";
        assert!(GraphDocument::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn empty_document_is_empty_graph() {
        let graph = GraphDocument::from_yaml_str("{}")
            .unwrap()
            .into_graph()
            .unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = GraphDocument::load(Path::new("/nonexistent/rota/city.yaml")).unwrap_err();
        match err {
            DocumentError::FileNotFound { path } => {
                assert!(path.ends_with("city.yaml"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("city.yaml");
        std::fs::write(&yaml_path, CITY_YAML).unwrap();
        let doc = GraphDocument::load(&yaml_path).unwrap();
        assert_eq!(doc.edges.len(), 2);

        let json_path = dir.path().join("city.json");
        std::fs::write(&json_path, CITY_YAML).unwrap();
        let err = GraphDocument::load(&json_path).unwrap_err();
        assert!(matches!(err, DocumentError::JsonParse { .. }));
    }
}
