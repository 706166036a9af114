//! # Shortest-Path Engine
//!
//! Single-source Dijkstra over a [`Graph`], minimizing one named metric of
//! the edges' weight bundles.
//!
//! ## Algorithm
//!
//! 1. Every node starts at +∞, the source at 0. No predecessors.
//! 2. Select the unvisited node with the smallest distance. Stop when none
//!    is left or the smallest distance is +∞.
//! 3. If the selected node is the requested target, stop. Entries beyond
//!    the target stay unresolved.
//! 4. Mark it visited; for every edge to an unvisited neighbor, if
//!    `distance(node) + weight(criterion)` is strictly smaller than the
//!    neighbor's distance, record it and point the neighbor's predecessor at
//!    the node.
//!
//! ## Selection and tie-break
//!
//! [`SelectionStrategy::LinearScan`] scans all nodes per step (O(V²));
//! [`SelectionStrategy::BinaryHeap`] keeps a lazy-deletion min-heap
//! (O((V+E) log V)). Among equally distant candidates both settle the
//! lowest [`NodeId`] first, so they yield identical distance tables *and*
//! identical predecessor maps.
//!
//! ## Failure
//!
//! [`RoutingError::UnknownNode`] when the source or target is not in the
//! graph; [`RoutingError::MissingMetric`] as soon as an examined edge lacks
//! the criterion. An unreachable node is not an error.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rota_core::{Metric, NodeId, RoutingError};
use rota_graph::Graph;

use crate::trace::{finite, TraversalStep};

/// Node → minimal accumulated weight from the source. Every node of the
/// graph has an entry; unreachable and unresolved nodes hold `f64::INFINITY`.
pub type DistanceTable = BTreeMap<NodeId, f64>;

/// Node → node its optimal arrival edge starts from. `None` for the source
/// and for nodes never reached.
pub type PredecessorMap = BTreeMap<NodeId, Option<NodeId>>;

// ---------------------------------------------------------------------------
// SelectionStrategy
// ---------------------------------------------------------------------------

/// How the next node to settle is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionStrategy {
    /// Scan every unvisited node per step.
    #[default]
    #[serde(alias = "scan")]
    LinearScan,
    /// Pop from a min-heap keyed by `(distance, node id)`.
    #[serde(alias = "heap")]
    BinaryHeap,
}

impl SelectionStrategy {
    /// Kebab-case name used in config files and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinearScan => "linear-scan",
            Self::BinaryHeap => "binary-heap",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized strategy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown selection strategy: {0:?} (expected \"linear-scan\"/\"scan\" or \"binary-heap\"/\"heap\")")]
pub struct UnknownStrategy(pub String);

impl FromStr for SelectionStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear-scan" | "scan" => Ok(Self::LinearScan),
            "binary-heap" | "heap" => Ok(Self::BinaryHeap),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ShortestPathRequest
// ---------------------------------------------------------------------------

/// Everything one engine run needs besides the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    /// Node distances are measured from.
    pub source: NodeId,
    /// Metric to minimize.
    pub criterion: Metric,
    /// Stop as soon as this node is selected. `None` resolves every
    /// reachable node.
    #[serde(default)]
    pub target: Option<NodeId>,
    #[serde(default)]
    pub strategy: SelectionStrategy,
    /// Record a [`TraversalStep`] list in the result.
    #[serde(default)]
    pub record_trace: bool,
}

impl ShortestPathRequest {
    /// Full single-source run with the default strategy and no trace.
    pub fn new(source: NodeId, criterion: Metric) -> Self {
        Self {
            source,
            criterion,
            target: None,
            strategy: SelectionStrategy::default(),
            record_trace: false,
        }
    }

    /// Stop as soon as `target` is settled.
    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    /// Select the next node with `strategy`.
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Record every visit and relaxation in the result trace.
    pub fn with_trace(mut self) -> Self {
        self.record_trace = true;
        self
    }
}

// ---------------------------------------------------------------------------
// ShortestPaths
// ---------------------------------------------------------------------------

/// Output of one engine run. Owned by the caller; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    source: NodeId,
    criterion: Metric,
    target: Option<NodeId>,
    distances: DistanceTable,
    predecessors: PredecessorMap,
    settled: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<TraversalStep>>,
}

impl ShortestPaths {
    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn criterion(&self) -> &Metric {
        &self.criterion
    }

    /// Target the run stopped at, if one was requested.
    pub fn target(&self) -> Option<&NodeId> {
        self.target.as_ref()
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Distance of `node`; `f64::INFINITY` if unreachable, unresolved, or
    /// not in the graph.
    pub fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn is_reachable(&self, node: &str) -> bool {
        self.distance(node).is_finite()
    }

    /// Predecessor of `node` on its best known path.
    pub fn predecessor(&self, node: &str) -> Option<&NodeId> {
        self.predecessors.get(node).and_then(Option::as_ref)
    }

    /// Number of nodes selected during the run (including a target that
    /// ended it).
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Recorded steps, when the request asked for them.
    pub fn trace(&self) -> Option<&[TraversalStep]> {
        self.trace.as_deref()
    }

    /// Split into the distance table and predecessor map.
    pub fn into_parts(self) -> (DistanceTable, PredecessorMap) {
        (self.distances, self.predecessors)
    }
}

// ---------------------------------------------------------------------------
// Engine entry point
// ---------------------------------------------------------------------------

/// Run Dijkstra over `graph` as described by `request`.
///
/// # Errors
///
/// - [`RoutingError::UnknownNode`] if `request.source` (or `request.target`,
///   when set) is not a node of `graph`.
/// - [`RoutingError::MissingMetric`] if an edge examined during relaxation
///   has no value for `request.criterion`.
pub fn compute_shortest_paths(
    graph: &Graph,
    request: &ShortestPathRequest,
) -> Result<ShortestPaths, RoutingError> {
    if !graph.contains(request.source.as_str()) {
        return Err(RoutingError::UnknownNode(request.source.clone()));
    }
    if let Some(target) = &request.target {
        if !graph.contains(target.as_str()) {
            return Err(RoutingError::UnknownNode(target.clone()));
        }
    }

    tracing::debug!(
        source = %request.source,
        criterion = %request.criterion,
        target = ?request.target.as_ref().map(NodeId::as_str),
        strategy = %request.strategy,
        "computing shortest paths"
    );

    let mut run = Relaxation::new(graph, request);
    match request.strategy {
        SelectionStrategy::LinearScan => run.by_linear_scan()?,
        SelectionStrategy::BinaryHeap => run.by_binary_heap()?,
    }

    tracing::debug!(settled = run.settled, "shortest paths computed");
    Ok(run.finish())
}

// ---------------------------------------------------------------------------
// Internal: relaxation state
// ---------------------------------------------------------------------------

/// Entry in the selection heap.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest distance
/// first and, among equal distances, the smallest node id.
#[derive(Debug, Clone)]
struct Candidate {
    distance: f64,
    node: NodeId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Per-call scratch state. Dropped (or turned into [`ShortestPaths`]) at
/// the end of the call.
struct Relaxation<'a> {
    graph: &'a Graph,
    request: &'a ShortestPathRequest,
    distances: DistanceTable,
    predecessors: PredecessorMap,
    visited: BTreeSet<NodeId>,
    settled: usize,
    trace: Option<Vec<TraversalStep>>,
}

impl<'a> Relaxation<'a> {
    fn new(graph: &'a Graph, request: &'a ShortestPathRequest) -> Self {
        let mut distances: DistanceTable = graph
            .nodes()
            .map(|id| (id.clone(), f64::INFINITY))
            .collect();
        let predecessors: PredecessorMap = graph.nodes().map(|id| (id.clone(), None)).collect();
        distances.insert(request.source.clone(), 0.0);

        Self {
            graph,
            request,
            distances,
            predecessors,
            visited: BTreeSet::new(),
            settled: 0,
            trace: request.record_trace.then(Vec::new),
        }
    }

    fn by_linear_scan(&mut self) -> Result<(), RoutingError> {
        while let Some((node, distance)) = self.closest_unvisited() {
            if self.settle(node, distance, |_, _| {})?.is_break() {
                return Ok(());
            }
        }
        self.record(TraversalStep::Exhausted);
        Ok(())
    }

    fn by_binary_heap(&mut self) -> Result<(), RoutingError> {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            distance: 0.0,
            node: self.request.source.clone(),
        });

        while let Some(Candidate { distance, node }) = heap.pop() {
            // Stale entry: a shorter distance was recorded after this push.
            if self.visited.contains(&node) || distance > self.distance_of(&node) {
                continue;
            }
            let flow = self.settle(node, distance, |node, distance| {
                heap.push(Candidate { distance, node });
            })?;
            if flow.is_break() {
                return Ok(());
            }
        }
        self.record(TraversalStep::Exhausted);
        Ok(())
    }

    /// Unvisited node with the smallest finite distance, lowest id first.
    fn closest_unvisited(&self) -> Option<(NodeId, f64)> {
        let mut best: Option<(&NodeId, f64)> = None;
        for (id, &distance) in &self.distances {
            if self.visited.contains(id) {
                continue;
            }
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }
        best.filter(|(_, d)| d.is_finite())
            .map(|(id, d)| (id.clone(), d))
    }

    /// Process one selected node. `on_update` sees every neighbor whose
    /// distance improved.
    fn settle(
        &mut self,
        node: NodeId,
        distance: f64,
        mut on_update: impl FnMut(NodeId, f64),
    ) -> Result<ControlFlow<()>, RoutingError> {
        self.settled += 1;
        tracing::trace!(node = %node, distance, "visiting");
        self.record(TraversalStep::Visited {
            node: node.clone(),
            distance,
        });

        if self.request.target.as_ref() == Some(&node) {
            self.record(TraversalStep::TargetReached { node, distance });
            return Ok(ControlFlow::Break(()));
        }

        let graph = self.graph;
        for (neighbor, weights) in graph.neighbors(node.as_str()) {
            if self.visited.contains(neighbor) || *neighbor == node {
                continue;
            }
            let edge_weight = weights.get(self.request.criterion.as_str()).ok_or_else(|| {
                RoutingError::MissingMetric {
                    from: node.clone(),
                    to: neighbor.clone(),
                    metric: self.request.criterion.clone(),
                }
            })?;

            let candidate = distance + edge_weight;
            let current = self.distance_of(neighbor);
            if candidate < current {
                self.distances.insert(neighbor.clone(), candidate);
                self.predecessors
                    .insert(neighbor.clone(), Some(node.clone()));
                self.record(TraversalStep::Relaxed {
                    from: node.clone(),
                    to: neighbor.clone(),
                    edge_weight,
                    previous: finite(current),
                    updated: candidate,
                });
                on_update(neighbor.clone(), candidate);
            } else {
                self.record(TraversalStep::Retained {
                    from: node.clone(),
                    to: neighbor.clone(),
                    edge_weight,
                    candidate,
                    current,
                });
            }
        }

        self.visited.insert(node);
        Ok(ControlFlow::Continue(()))
    }

    fn distance_of(&self, node: &NodeId) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    fn record(&mut self, step: TraversalStep) {
        if let Some(trace) = self.trace.as_mut() {
            trace.push(step);
        }
    }

    fn finish(self) -> ShortestPaths {
        ShortestPaths {
            source: self.request.source.clone(),
            criterion: self.request.criterion.clone(),
            target: self.request.target.clone(),
            distances: self.distances,
            predecessors: self.predecessors,
            settled: self.settled,
            trace: self.trace,
        }
    }
}
