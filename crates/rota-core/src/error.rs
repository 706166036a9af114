//! # Error Hierarchy
//!
//! Structured error types for rota, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Two outcomes that look like failures are deliberately *not* errors:
//! an unreachable destination (infinite distance, empty path) and a route
//! whose origin equals its destination (trivial zero-cost route).

use thiserror::Error;

use crate::identity::{Metric, NodeId};

/// Errors raised by the shortest-path engine and the route planner.
///
/// These are detected synchronously at the offending call. Retrying cannot
/// change the outcome: the caller has to supply a corrected graph, node
/// identifier, or criterion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// A source, target, origin, or destination is not a node of the graph.
    #[error("unknown node: \"{0}\"")]
    UnknownNode(NodeId),

    /// An edge reached during relaxation has no value for the active
    /// criterion. Never coerced to zero.
    #[error("edge {from} -> {to} has no value for metric \"{metric}\"")]
    MissingMetric {
        /// Tail of the offending edge.
        from: NodeId,
        /// Head of the offending edge.
        to: NodeId,
        /// The criterion being minimized.
        metric: Metric,
    },
}

/// Validation errors for domain primitives.
///
/// Each carries the rejected input so that a malformed graph document can be
/// diagnosed without guesswork.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Node identifier is empty or whitespace-only.
    #[error("invalid node ID: must be non-empty")]
    InvalidNodeId,

    /// Metric name is empty, whitespace-only, or contains whitespace.
    #[error("invalid metric name: \"{0}\" (expected a non-empty name without whitespace)")]
    InvalidMetric(String),

    /// Weight is negative, NaN, or above [`MAX_WEIGHT`](crate::weight::MAX_WEIGHT).
    #[error("invalid weight for metric \"{metric}\": {value} (expected 0 <= value <= 1e15)")]
    InvalidWeight {
        /// The metric the value was given for.
        metric: String,
        /// The rejected value.
        value: f64,
    },
}
