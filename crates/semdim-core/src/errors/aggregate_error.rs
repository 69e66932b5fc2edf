use super::SemdimError;

/// Run aggregation errors.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("metric not registered: {name}")]
    UnregisteredMetric { name: String },

    #[error("metric registered twice: {name}")]
    DuplicateMetric { name: String },

    #[error("comparison {label} references unknown dimension {dimension}")]
    UnknownDimension { label: String, dimension: String },

    #[error("run {run} failed: {source}")]
    RunFailed {
        run: String,
        #[source]
        source: Box<SemdimError>,
    },
}
