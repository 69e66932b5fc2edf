//! # semdim-dimensions
//!
//! Bipolar semantic dimensions over a single vector space.
//!
//! - [`DimensionBuilder`] turns two seed term lists into a unit direction
//! - [`DimensionValidator`] checks how well that direction separates its own
//!   seed terms under stratified k-fold cross-validation
//! - [`DimensionComparator`] measures cosine similarity between dimensions
//!   and lists the terms nearest each end

pub mod builder;
pub mod comparator;
pub mod dimension;
pub mod validator;

pub use builder::DimensionBuilder;
pub use comparator::{DimensionComparator, DimensionNeighbors};
pub use dimension::{Dimension, DimensionMethod, Omission, OmissionReason};
pub use validator::{CrossValidation, DimensionValidator};
