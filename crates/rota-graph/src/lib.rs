//! # rota-graph — Graph Store
//!
//! Owns the nodes and weighted edges that route computations run over.
//!
//! - **Graph** ([`graph`]): the store itself. Nodes are keyed by
//!   [`NodeId`](rota_core::NodeId) and carry an optional display label;
//!   each node owns its outgoing adjacency (neighbor → weight bundle).
//!   Adding an edge between unknown nodes creates them.
//!
//! - **Document** ([`document`]): declarative YAML/JSON description of a
//!   graph, read into a [`Graph`]. Read-only; nothing is ever written back.
//!
//! - **Samples** ([`samples`]): factories for the reference graphs used in
//!   tests and by the CLI's `--sample` flag.
//!
//! ## Crate Policy
//!
//! - The store raises no errors. Weight validation happens when a
//!   [`WeightBundle`](rota_core::WeightBundle) is built.
//! - A graph is never mutated by a route computation; all queries take
//!   `&self`.

pub mod document;
pub mod error;
pub mod graph;
pub mod samples;

pub use document::{EdgeSpec, GraphDocument, NodeSpec};
pub use error::{DocumentError, DocumentResult};
pub use graph::{Graph, NodeRecord};
