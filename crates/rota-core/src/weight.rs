//! # Weight Bundles
//!
//! An edge carries a [`WeightBundle`]: a set of named, non-negative metrics
//! such as `distance` (km) and `time` (minutes). A route computation picks
//! one of them as its criterion; the others are reported as descriptive
//! totals of the chosen route.
//!
//! Values are validated on every insertion: `0 <= value <= MAX_WEIGHT`.
//! Negative weights are out of scope for Dijkstra and rejected here rather
//! than in the engine. The upper bound keeps any accumulated path cost far
//! below `f64::MAX`, so a sum of edge weights never overflows to +∞, the
//! engine's "unreachable" value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::Metric;

/// Largest accepted value for any metric.
pub const MAX_WEIGHT: f64 = 1.0e15;

/// Named, non-negative metrics carried by one edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct WeightBundle {
    values: BTreeMap<Metric, f64>,
}

impl WeightBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle with a single value under [`Metric::weight`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidWeight`] if `value` is negative,
    /// NaN, or above [`MAX_WEIGHT`].
    pub fn single(value: f64) -> Result<Self, ValidationError> {
        let mut bundle = Self::new();
        bundle.insert(Metric::weight(), value)?;
        Ok(bundle)
    }

    /// Builder-style insert.
    ///
    /// ```
    /// use rota_core::WeightBundle;
    ///
    /// let w = WeightBundle::new()
    ///     .with("distance", 2.3)?
    ///     .with("time", 8.0)?;
    /// assert_eq!(w.get("time"), Some(8.0));
    /// # Ok::<(), rota_core::ValidationError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the metric name or the value is
    /// invalid.
    pub fn with(mut self, metric: impl Into<String>, value: f64) -> Result<Self, ValidationError> {
        let metric = Metric::new(metric)?;
        self.insert(metric, value)?;
        Ok(self)
    }

    /// Set `metric` to `value`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidWeight`] if `value` is negative,
    /// NaN, or above [`MAX_WEIGHT`]. The bundle is left unchanged.
    pub fn insert(&mut self, metric: Metric, value: f64) -> Result<(), ValidationError> {
        if !(0.0..=MAX_WEIGHT).contains(&value) {
            return Err(ValidationError::InvalidWeight {
                metric: metric.to_string(),
                value,
            });
        }
        self.values.insert(metric, value);
        Ok(())
    }

    /// Value of `metric`, if present.
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }

    /// Whether the bundle carries `metric`.
    pub fn contains(&self, metric: &str) -> bool {
        self.values.contains_key(metric)
    }

    /// Metric names in ascending order.
    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.values.keys()
    }

    /// `(metric, value)` pairs in ascending metric order.
    pub fn iter(&self) -> impl Iterator<Item = (&Metric, f64)> {
        self.values.iter().map(|(m, v)| (m, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for WeightBundle {
    type Error = ValidationError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut bundle = Self::new();
        for (name, value) in raw {
            bundle.insert(Metric::new(name)?, value)?;
        }
        Ok(bundle)
    }
}

impl From<WeightBundle> for BTreeMap<String, f64> {
    fn from(bundle: WeightBundle) -> Self {
        bundle
            .values
            .into_iter()
            .map(|(m, v)| (String::from(m), v))
            .collect()
    }
}
