//! # semdim-core
//!
//! Foundation crate for the semantic dimension engine.
//! Defines shared types, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

pub use config::SemdimConfig;
pub use errors::{SemdimError, SemdimResult};
pub use models::{ComparisonSpec, DimensionSpec, FoldMetrics, Pole, RunId, TermFoldSpec};
