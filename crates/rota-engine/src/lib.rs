//! # rota-engine — Shortest Paths and Route Planning
//!
//! - **Engine** ([`engine`]): single-source Dijkstra over a [`Graph`]
//!   minimizing one named metric. Produces a distance table (+∞ for
//!   unreachable nodes) and a predecessor map. Optional early exit at a
//!   target, optional traversal trace.
//!
//! - **Path** ([`path`]): walks a predecessor map back from a destination
//!   to produce the ordered route, or an empty route when none exists.
//!
//! - **Planner** ([`planner`]): single-route and multi-destination planning
//!   on top of the engine, with every reported metric recomputed along the
//!   chosen route.
//!
//! ## Crate Policy
//!
//! - The engine is stateless. Each call allocates its own tables and never
//!   mutates the graph, so computations over one graph may run on separate
//!   threads.
//! - No console output. Narration is built from [`TraversalStep`]s by the
//!   caller.
//!
//! [`Graph`]: rota_graph::Graph

pub mod engine;
pub mod path;
pub mod planner;
pub mod trace;

pub use engine::{
    compute_shortest_paths, DistanceTable, PredecessorMap, SelectionStrategy,
    ShortestPathRequest, ShortestPaths, UnknownStrategy,
};
pub use path::reconstruct_path;
pub use planner::{PlanSummary, RouteExplanation, RouteLeg, RoutePlanner, RouteResult};
pub use trace::TraversalStep;
