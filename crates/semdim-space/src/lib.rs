//! # semdim-space
//!
//! One trained embedding model as an in-memory vector space: term lookup,
//! frequencies, cosine nearest neighbors, and composite term folding.
//! Models are loaded through an [`IEmbeddingStore`].

pub mod folding;
pub mod math;
pub mod space;
pub mod store;

pub use folding::{FoldOutcome, TermFolder};
pub use space::{Neighbor, VectorSpace};
pub use store::{write_text_model, IEmbeddingStore, TextEmbeddingStore};
