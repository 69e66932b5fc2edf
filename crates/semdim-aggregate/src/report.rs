//! AggregateReport: per-metric summaries over runs, by window and combined.

use std::collections::BTreeMap;

use semdim_core::errors::AggregateError;
use serde::Serialize;

use crate::metrics::MetricRegistry;
use crate::neighbors::NeighborTallies;
use crate::record::RunRecord;
use crate::summary::AggregateSummary;
use crate::word_counts::WordCountReport;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateReport {
    /// One summary per registered metric, in registration order.
    pub combined: Vec<AggregateSummary>,
    /// The same summaries restricted to each window's runs.
    pub by_window: BTreeMap<u16, Vec<AggregateSummary>>,
    pub neighbors: NeighborTallies,
    pub word_counts: WordCountReport,
}

impl AggregateReport {
    /// Fold `records` (in run order) into summaries keyed by `registry`.
    ///
    /// # Errors
    /// `UnregisteredMetric` if a record carries a metric the registry lacks.
    pub fn build(registry: &MetricRegistry, records: &[RunRecord]) -> Result<Self, AggregateError> {
        let mut combined: Vec<AggregateSummary> = registry
            .keys()
            .iter()
            .cloned()
            .map(AggregateSummary::new)
            .collect();
        let mut neighbors = NeighborTallies::default();

        for record in records {
            for (key, value) in record.metric_values() {
                let slot = registry.slot(&key)?;
                combined[slot].push(record.run, value);
            }
            for n in &record.neighbors {
                neighbors.add(n);
            }
        }

        let mut by_window = BTreeMap::new();
        for record in records {
            by_window.entry(record.run.window).or_insert_with(|| {
                combined
                    .iter()
                    .map(|s| s.for_window(record.run.window))
                    .collect::<Vec<_>>()
            });
        }

        let word_counts =
            WordCountReport::from_rows(records.iter().flat_map(|r| r.word_counts.iter().cloned()));

        Ok(Self {
            combined,
            by_window,
            neighbors,
            word_counts,
        })
    }

    /// Combined summary for a metric name such as `cossim_pure_danger`.
    pub fn summary(&self, metric: &str) -> Option<&AggregateSummary> {
        self.combined.iter().find(|s| s.metric.name() == metric)
    }

    pub fn window_summary(&self, window: u16, metric: &str) -> Option<&AggregateSummary> {
        self.by_window
            .get(&window)?
            .iter()
            .find(|s| s.metric.name() == metric)
    }

    pub fn windows(&self) -> impl Iterator<Item = u16> + '_ {
        self.by_window.keys().copied()
    }
}
