//! Configuration for dimension studies.
//! TOML-based, resolution: env > file > defaults.

pub mod aggregation_config;
pub mod defaults;
pub mod folding_config;
pub mod observability_config;
pub mod semdim_config;
pub mod study_config;
pub mod validation_config;

pub use aggregation_config::AggregationConfig;
pub use folding_config::FoldingConfig;
pub use observability_config::ObservabilityConfig;
pub use semdim_config::SemdimConfig;
pub use study_config::StudyConfig;
pub use validation_config::ValidationConfig;
