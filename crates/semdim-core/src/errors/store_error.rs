/// Embedding store errors. Any of these is fatal for the run that hit it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("model load failed: {path}: {reason}")]
    ModelLoadError { path: String, reason: String },

    #[error("model parse error in {path} at line {line}: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },
}
