//! # Graph
//!
//! A weighted graph whose edges carry [`WeightBundle`]s.
//!
//! ## Structure
//!
//! - **Nodes** are keyed by [`NodeId`]; each owns a [`NodeRecord`] holding its
//!   optional display label and its outgoing adjacency.
//! - **Edges** live in the adjacency of their source node. A bidirectional
//!   edge is stored twice, once per endpoint, with identical bundles.
//! - At most one edge per ordered pair: adding it again replaces the bundle.
//!
//! Nodes and adjacencies are `BTreeMap`s, so every iteration is in ascending
//! id order and stable for the lifetime of the graph.

use std::collections::{BTreeMap, BTreeSet};

use rota_core::{Metric, NodeId, WeightBundle};

static NO_NEIGHBORS: BTreeMap<NodeId, WeightBundle> = BTreeMap::new();

// ---------------------------------------------------------------------------
// NodeRecord
// ---------------------------------------------------------------------------

/// A node's label and outgoing edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRecord {
    label: Option<String>,
    adjacency: BTreeMap<NodeId, WeightBundle>,
}

impl NodeRecord {
    /// Display label, if one was given.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Outgoing edges: neighbor → weight bundle.
    pub fn adjacency(&self) -> &BTreeMap<NodeId, WeightBundle> {
        &self.adjacency
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Graph store: the read-only input of every route computation.
///
/// No operation on the store fails. Unknown ids passed to queries yield
/// empty results; unknown endpoints passed to `add_*edge` are created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: BTreeMap<NodeId, NodeRecord>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Idempotent.
    ///
    /// Re-adding a node keeps its edges and its existing label; a label is
    /// only set if the node had none.
    pub fn add_node(&mut self, id: NodeId, label: Option<String>) {
        let record = self.nodes.entry(id).or_default();
        if record.label.is_none() {
            record.label = label;
        }
    }

    /// Add a bidirectional edge between `a` and `b`.
    ///
    /// Both endpoints are created if missing. The bundle is stored in both
    /// adjacencies, replacing any previous edge between the pair.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weights: WeightBundle) {
        self.insert_directed(b.clone(), a.clone(), weights.clone());
        self.insert_directed(a, b, weights);
    }

    /// Add an edge from `from` to `to` only.
    ///
    /// Both endpoints are created if missing.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weights: WeightBundle) {
        self.insert_directed(from, to, weights);
    }

    /// Outgoing edges of `id`. Empty for a node without edges and for an
    /// absent node.
    pub fn neighbors(&self, id: &str) -> &BTreeMap<NodeId, WeightBundle> {
        self.nodes
            .get(id)
            .map(NodeRecord::adjacency)
            .unwrap_or(&NO_NEIGHBORS)
    }

    /// All node ids, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Node ids paired with their records, ascending.
    pub fn records(&self) -> impl Iterator<Item = (&NodeId, &NodeRecord)> {
        self.nodes.iter()
    }

    /// The record of `id`, if present.
    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    /// Display name of `id`: its label if set, else the id itself.
    pub fn node_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.nodes
            .get(id)
            .and_then(NodeRecord::label)
            .unwrap_or(id)
    }

    /// Whether `id` is a node of the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Weight bundle of the edge `from -> to`, if present.
    pub fn edge(&self, from: &str, to: &str) -> Option<&WeightBundle> {
        self.nodes.get(from)?.adjacency.get(to)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed adjacency entries. A bidirectional edge counts
    /// twice.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(NodeRecord::out_degree).sum()
    }

    /// Union of the metric names used by any edge, ascending.
    pub fn metrics(&self) -> BTreeSet<Metric> {
        self.nodes
            .values()
            .flat_map(|record| record.adjacency.values())
            .flat_map(WeightBundle::metrics)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert_directed(&mut self, from: NodeId, to: NodeId, weights: WeightBundle) {
        self.nodes.entry(to.clone()).or_default();
        let record = self.nodes.entry(from).or_default();
        if let Some(previous) = record.adjacency.insert(to, weights) {
            tracing::trace!(?previous, "replaced existing edge weights");
        }
    }
}
