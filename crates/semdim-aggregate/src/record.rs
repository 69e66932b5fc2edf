//! RunRecord: everything one (window, resample) evaluation produced.

use semdim_core::errors::DimensionError;
use semdim_core::models::RunId;
use semdim_dimensions::{CrossValidation, Dimension, DimensionNeighbors};
use serde::{Deserialize, Serialize};

use crate::metrics::{MetricKey, MetricKind};
use crate::word_counts::WordCountRow;

/// Cosine similarity between two dimensions in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub label: String,
    pub first: String,
    pub second: String,
    pub cosine: f64,
}

/// A dimension that could not be built or validated in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionFailure {
    pub dimension: String,
    pub error: DimensionError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub run: RunId,
    /// Dimensions built in this run, in study order.
    pub dimensions: Vec<Dimension>,
    pub validations: Vec<CrossValidation>,
    pub comparisons: Vec<ComparisonResult>,
    pub neighbors: Vec<DimensionNeighbors>,
    pub dimension_failures: Vec<DimensionFailure>,
    pub word_counts: Vec<WordCountRow>,
}

impl RunRecord {
    pub fn new(run: RunId) -> Self {
        Self {
            run,
            dimensions: Vec::new(),
            validations: Vec::new(),
            comparisons: Vec::new(),
            neighbors: Vec::new(),
            dimension_failures: Vec::new(),
            word_counts: Vec::new(),
        }
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn validation(&self, name: &str) -> Option<&CrossValidation> {
        self.validations.iter().find(|v| v.dimension == name)
    }

    pub fn comparison(&self, label: &str) -> Option<&ComparisonResult> {
        self.comparisons.iter().find(|c| c.label == label)
    }

    /// Every scalar metric this run produced, validation metrics first.
    pub fn metric_values(&self) -> Vec<(MetricKey, f64)> {
        let mut values = Vec::with_capacity(self.validations.len() * 4 + self.comparisons.len());
        for cv in &self.validations {
            for kind in MetricKind::VALIDATION {
                let value = match kind {
                    MetricKind::TrainAccuracyN => cv.train_accuracy_n() as f64,
                    MetricKind::TrainAccuracyPercent => cv.train_accuracy_percent(),
                    MetricKind::HoldoutAccuracyN => cv.holdout_accuracy_n() as f64,
                    MetricKind::HoldoutAccuracyPercent => cv.holdout_accuracy_percent(),
                    MetricKind::Cossim => continue,
                };
                values.push((MetricKey::new(kind, &cv.dimension), value));
            }
        }
        for cmp in &self.comparisons {
            values.push((MetricKey::new(MetricKind::Cossim, &cmp.label), cmp.cosine));
        }
        values
    }
}
