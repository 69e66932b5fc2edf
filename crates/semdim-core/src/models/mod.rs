//! Data model shared across the workspace.

pub mod dimension_spec;
pub mod fold_metrics;
pub mod pole;
pub mod run_id;
pub mod term_fold;

pub use dimension_spec::{ComparisonSpec, DimensionSpec, SeedRecord, STANDARD_DIMENSIONS};
pub use fold_metrics::{Accuracy, FoldMetrics};
pub use pole::Pole;
pub use run_id::RunId;
pub use term_fold::TermFoldSpec;
