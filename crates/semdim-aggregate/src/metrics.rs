//! Metric registry: the enumerable set of scalar metrics a study collects.

use std::collections::HashMap;
use std::fmt;

use semdim_core::errors::AggregateError;
use semdim_core::models::{ComparisonSpec, DimensionSpec};
use serde::{Deserialize, Serialize};

/// What a scalar metric measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    TrainAccuracyN,
    TrainAccuracyPercent,
    HoldoutAccuracyN,
    HoldoutAccuracyPercent,
    /// Cosine similarity between two dimensions.
    Cossim,
}

impl MetricKind {
    pub const VALIDATION: [MetricKind; 4] = [
        MetricKind::TrainAccuracyN,
        MetricKind::TrainAccuracyPercent,
        MetricKind::HoldoutAccuracyN,
        MetricKind::HoldoutAccuracyPercent,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            MetricKind::TrainAccuracyN => "train_accuracy_N",
            MetricKind::TrainAccuracyPercent => "train_accuracy_percent",
            MetricKind::HoldoutAccuracyN => "holdout_accuracy_N",
            MetricKind::HoldoutAccuracyPercent => "holdout_accuracy_percent",
            MetricKind::Cossim => "cossim",
        }
    }
}

/// A metric kind applied to a subject: a dimension name, or a comparison label
/// for `Cossim`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricKey {
    pub kind: MetricKind,
    pub subject: String,
}

impl MetricKey {
    pub fn new(kind: MetricKind, subject: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
        }
    }

    /// Report name, e.g. `holdout_accuracy_percent_danger` or `cossim_pure_danger`.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind.prefix(), self.subject)
    }
}

/// Ordered, duplicate-free set of metrics.
#[derive(Debug, Clone, Default)]
pub struct MetricRegistry {
    keys: Vec<MetricKey>,
    index: HashMap<MetricKey, usize>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every metric a study over `dimensions` and `comparisons` produces:
    /// four validation metrics per dimension, then one cosine per comparison.
    pub fn for_study(
        dimensions: &[DimensionSpec],
        comparisons: &[ComparisonSpec],
    ) -> Result<Self, AggregateError> {
        let mut registry = Self::new();
        for dim in dimensions {
            for kind in MetricKind::VALIDATION {
                registry.register(MetricKey::new(kind, &dim.name))?;
            }
        }
        for cmp in comparisons {
            registry.register(MetricKey::new(MetricKind::Cossim, &cmp.label))?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, key: MetricKey) -> Result<usize, AggregateError> {
        if self.index.contains_key(&key) {
            return Err(AggregateError::DuplicateMetric { name: key.name() });
        }
        let slot = self.keys.len();
        self.index.insert(key.clone(), slot);
        self.keys.push(key);
        Ok(slot)
    }

    /// Slot of a registered metric.
    pub fn slot(&self, key: &MetricKey) -> Result<usize, AggregateError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| AggregateError::UnregisteredMetric { name: key.name() })
    }

    pub fn keys(&self) -> &[MetricKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
