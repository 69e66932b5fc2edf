//! Cross-run summaries of scalar metrics.
//!
//! Standard deviation is the population form (divisor `n`).

use semdim_core::models::RunId;
use serde::{Deserialize, Serialize};

use crate::metrics::MetricKey;

/// One run's value for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunValue {
    pub run: RunId,
    pub value: f64,
}

/// Raw per-run values of one metric plus derived statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub metric: MetricKey,
    /// Values in run order.
    pub values: Vec<RunValue>,
}

impl AggregateSummary {
    pub fn new(metric: MetricKey) -> Self {
        Self {
            metric,
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, run: RunId, value: f64) {
        self.values.push(RunValue { run, value });
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn mean(&self) -> Option<f64> {
        mean(self.raw())
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> Option<f64> {
        population_std_dev(self.raw())
    }

    pub fn min(&self) -> Option<f64> {
        self.raw().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.raw().reduce(f64::max)
    }

    /// Only the values from runs in `window`.
    pub fn for_window(&self, window: u16) -> AggregateSummary {
        AggregateSummary {
            metric: self.metric.clone(),
            values: self
                .values
                .iter()
                .filter(|v| v.run.window == window)
                .copied()
                .collect(),
        }
    }

    pub fn stats(&self) -> SummaryStats {
        SummaryStats {
            metric: self.metric.name(),
            n: self.count(),
            mean: self.mean(),
            std_dev: self.std_dev(),
            min: self.min(),
            max: self.max(),
        }
    }

    fn raw(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        self.values.iter().map(|v| v.value)
    }
}

/// Derived scalars for reporting. Empty summaries have no statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub metric: String,
    pub n: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Population standard deviation, `sqrt(sum((x - mean)^2) / n)`.
pub fn population_std_dev(values: impl Iterator<Item = f64> + Clone) -> Option<f64> {
    let m = mean(values.clone())?;
    let (sq, n) = values.fold((0.0, 0usize), |(s, n), v| (s + (v - m).powi(2), n + 1));
    Some((sq / n as f64).sqrt())
}
