//! Embedding stores: where a run's vector space comes from.

pub mod text_store;

use semdim_core::errors::StoreError;
use semdim_core::models::RunId;

use crate::space::VectorSpace;

pub use text_store::{write_text_model, TextEmbeddingStore};

/// Loads the trained model for one (window, resample) run.
///
/// Each call returns a fresh, exclusively owned space. Implementations must
/// be shareable across worker threads.
pub trait IEmbeddingStore: Send + Sync {
    /// Load the model for `run`. Any failure is a `ModelLoadError` or
    /// `ParseError` for that run only.
    fn load(&self, run: RunId) -> Result<VectorSpace, StoreError>;

    /// Human-readable store name for logs.
    fn name(&self) -> &str;
}
