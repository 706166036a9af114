//! # Identity Newtypes
//!
//! [`NodeId`] names a location in a graph; [`Metric`] names one field of an
//! edge's weight bundle (`distance`, `time`, ...). Both are validated at
//! construction and again on deserialization, so a `NodeId` in hand is always
//! well-formed.
//!
//! ## Ordering
//!
//! Both types order byte-wise by their string value. The shortest-path
//! engine relies on this: among equally distant candidates, the lowest
//! `NodeId` is settled first.
//!
//! Both implement `Borrow<str>`, so maps keyed by them can be queried with a
//! plain `&str`.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Name of the metric used for single-metric graphs.
pub const DEFAULT_METRIC: &str = "weight";

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Identifier of a node in a graph.
///
/// # Validation
///
/// Must be non-empty and not whitespace-only. No further format restrictions
/// are imposed: street addresses, single letters and numeric codes are all
/// fine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Create a node identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNodeId`] if the string is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidNodeId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NodeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NodeId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// Name of an edge metric, and of the criterion a route computation
/// minimizes.
///
/// # Validation
///
/// Must be non-empty and contain no whitespace, so that it can be written
/// as a bare YAML key or CLI flag value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Metric(String);

impl Metric {
    /// Create a metric name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMetric`] if the name is empty or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidMetric(s));
        }
        Ok(Self(s))
    }

    /// The metric of single-metric graphs ([`DEFAULT_METRIC`]).
    pub fn weight() -> Self {
        Self(DEFAULT_METRIC.to_string())
    }

    /// The `distance` metric.
    pub fn distance() -> Self {
        Self("distance".to_string())
    }

    /// The `time` metric.
    pub fn time() -> Self {
        Self("time".to_string())
    }

    /// Access the metric name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::weight()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Metric {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Metric {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Metric {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Metric {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Metric> for String {
    fn from(metric: Metric) -> Self {
        metric.0
    }
}
