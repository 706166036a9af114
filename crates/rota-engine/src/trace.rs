//! Traversal trace.
//!
//! When a [`ShortestPathRequest`](crate::ShortestPathRequest) asks for it,
//! the engine records every selection and every edge it examines, in
//! order. A presentation layer can turn the list into step-by-step
//! narration without re-running the algorithm.

use serde::Serialize;

use rota_core::NodeId;

/// One event of an engine run.
///
/// Distances that are still +∞ are recorded as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum TraversalStep {
    /// `node` was selected as the closest unvisited node.
    Visited { node: NodeId, distance: f64 },

    /// The edge `from -> to` improved `to`'s distance.
    Relaxed {
        from: NodeId,
        to: NodeId,
        edge_weight: f64,
        previous: Option<f64>,
        updated: f64,
    },

    /// The edge `from -> to` did not beat `to`'s recorded distance.
    Retained {
        from: NodeId,
        to: NodeId,
        edge_weight: f64,
        candidate: f64,
        current: f64,
    },

    /// The selected node is the requested target; the run stops here.
    TargetReached { node: NodeId, distance: f64 },

    /// No unvisited node has a finite distance; the run is complete.
    Exhausted,
}

impl TraversalStep {
    /// Whether this step ends the run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::TargetReached { .. } | Self::Exhausted)
    }
}

pub(crate) fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
