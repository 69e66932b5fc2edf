//! Error handling for the semantic dimension engine.
//! One error enum per subsystem, `thiserror` only.

pub mod aggregate_error;
pub mod config_error;
pub mod dimension_error;
pub mod semdim_error;
pub mod space_error;
pub mod store_error;

pub use aggregate_error::AggregateError;
pub use config_error::ConfigError;
pub use dimension_error::DimensionError;
pub use semdim_error::{SemdimError, SemdimResult};
pub use space_error::SpaceError;
pub use store_error::StoreError;
