use super::{AggregateError, ConfigError, DimensionError, SpaceError, StoreError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SemdimError {
    #[error("vector space error: {0}")]
    Space(#[from] SpaceError),

    #[error("dimension error: {0}")]
    Dimension(#[from] DimensionError),

    #[error("embedding store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("aggregation error: {0}")]
    Aggregate(#[from] AggregateError),
}

impl SemdimError {
    /// Whether this error only invalidates the run that produced it.
    ///
    /// Configuration and registry errors are caller mistakes and poison every run.
    pub fn is_run_local(&self) -> bool {
        matches!(
            self,
            Self::Space(_) | Self::Dimension(_) | Self::Store(_)
        )
    }
}

pub type SemdimResult<T> = Result<T, SemdimError>;
