/// Vector space lookup and arithmetic errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpaceError {
    #[error("term not found in vocabulary: {term}")]
    TermNotFound { term: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("zero-length vector cannot be normalized: {term}")]
    ZeroVector { term: String },

    #[error("vector space has no vocabulary")]
    EmptyVocabulary,
}
