//! DimensionComparator: relate dimensions to each other and to the vocabulary.

use semdim_core::errors::SpaceError;
use semdim_space::{math, Neighbor, VectorSpace};
use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Terms closest to each end of a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionNeighbors {
    pub dimension: String,
    /// Nearest neighbors of the direction (pole A end).
    pub most_similar: Vec<Neighbor>,
    /// Nearest neighbors of the negated direction (pole B end).
    pub least_similar: Vec<Neighbor>,
}

pub struct DimensionComparator;

impl DimensionComparator {
    /// Cosine similarity of two dimension directions, in `[-1, 1]`.
    pub fn cosine(a: &Dimension, b: &Dimension) -> f64 {
        math::cosine_similarity(a.direction(), b.direction())
    }

    /// Most and least similar terms along `dimension`.
    ///
    /// "Least similar" is the nearest-neighbor list of the opposite
    /// direction, not the tail of the most-similar ranking.
    pub fn neighbors(
        space: &VectorSpace,
        dimension: &Dimension,
        top_n: usize,
    ) -> Result<DimensionNeighbors, SpaceError> {
        let most_similar = space.nearest(dimension.direction(), top_n)?;
        let least_similar = space.nearest(&math::negate(dimension.direction()), top_n)?;
        Ok(DimensionNeighbors {
            dimension: dimension.name.clone(),
            most_similar,
            least_similar,
        })
    }
}
