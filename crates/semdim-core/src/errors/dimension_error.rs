use crate::models::Pole;

/// Dimension construction and validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DimensionError {
    #[error("dimension {dimension}: pole {pole} has no resolvable terms")]
    EmptyPole { dimension: String, pole: Pole },

    #[error("cannot cross-validate with {requested} folds: smaller pole has {smaller_pole} terms, at least 2 required")]
    InvalidFoldCount {
        requested: usize,
        smaller_pole: usize,
    },

    #[error("dimension {dimension}: pole means coincide, direction is undefined")]
    DegenerateDirection { dimension: String },

    #[error("dimension {dimension}: term {term} appears in both poles")]
    OverlappingPoles { dimension: String, term: String },
}
