//! # rota-core — Foundational Types
//!
//! Defines the primitives every other rota crate builds on. Depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** [`NodeId`] and [`Metric`] are
//!    validated at construction time. No bare strings cross crate boundaries.
//!
//! 2. **Weights are validated once.** A [`WeightBundle`] only ever holds
//!    finite, non-negative values, so the shortest-path engine never sees a
//!    negative or NaN weight.
//!
//! 3. **Single error hierarchy.** [`RoutingError`] carries the only two
//!    failure modes of a route computation; unreachable destinations are
//!    results, not errors.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rota-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod weight;

pub use error::{RoutingError, ValidationError};
pub use identity::{Metric, NodeId, DEFAULT_METRIC};
pub use weight::{WeightBundle, MAX_WEIGHT};
