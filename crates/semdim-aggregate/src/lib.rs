//! # semdim-aggregate
//!
//! Repeats dimension construction and validation over every
//! (time window, bootstrap resample) run and summarizes the results.
//!
//! - [`RunAggregator`] drives the runs in parallel and collects failures
//! - [`MetricRegistry`] fixes the set of scalar metrics up front
//! - [`AggregateReport`] holds per-window and combined [`AggregateSummary`]s,
//!   neighbor tallies and word counts
//! - [`tables`] renders everything as CSV

pub mod metrics;
pub mod neighbors;
pub mod record;
pub mod report;
pub mod runner;
pub mod summary;
pub mod tables;
pub mod word_counts;

pub use metrics::{MetricKey, MetricKind, MetricRegistry};
pub use neighbors::{NeighborEnd, NeighborTallies, NeighborTally, TallyEntry};
pub use record::{ComparisonResult, DimensionFailure, RunRecord};
pub use report::AggregateReport;
pub use runner::{AggregateOutcome, RunAggregator, RunFailure};
pub use summary::{AggregateSummary, RunValue, SummaryStats};
pub use word_counts::{count_words, WordCountEntry, WordCountReport, WordCountRow};
