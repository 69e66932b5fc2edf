//! The built Dimension and its construction record.

use semdim_core::models::Pole;
use serde::{Deserialize, Serialize};

use semdim_space::math;

/// How a direction is derived from pole vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionMethod {
    /// Difference of the pole means of unit-normalized term vectors.
    #[default]
    Larsen,
}

/// Why a seed term was left out of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OmissionReason {
    NotInVocabulary,
    ZeroVector,
}

/// A seed term that did not contribute to a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Omission {
    pub term: String,
    pub pole: Pole,
    pub reason: OmissionReason,
}

/// A named bipolar construct resolved against one vector space.
///
/// Positive projection onto `direction` indicates affinity toward pole A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub method: DimensionMethod,
    /// Pole A terms that resolved, in seed order.
    pub pole_a: Vec<String>,
    /// Pole B terms that resolved, in seed order.
    pub pole_b: Vec<String>,
    pub omissions: Vec<Omission>,
    direction: Vec<f32>,
}

impl Dimension {
    pub(crate) fn new(
        name: String,
        method: DimensionMethod,
        pole_a: Vec<String>,
        pole_b: Vec<String>,
        omissions: Vec<Omission>,
        direction: Vec<f32>,
    ) -> Self {
        Self {
            name,
            method,
            pole_a,
            pole_b,
            omissions,
            direction,
        }
    }

    /// Unit-length direction vector.
    pub fn direction(&self) -> &[f32] {
        &self.direction
    }

    /// The same construct with poles swapped.
    pub fn negated(&self) -> Dimension {
        Dimension {
            name: self.name.clone(),
            method: self.method,
            pole_a: self.pole_b.clone(),
            pole_b: self.pole_a.clone(),
            omissions: self
                .omissions
                .iter()
                .map(|o| Omission {
                    pole: o.pole.other(),
                    ..o.clone()
                })
                .collect(),
            direction: math::negate(&self.direction),
        }
    }

    /// Dot product of `vector` with the direction.
    pub fn project(&self, vector: &[f32]) -> f64 {
        math::dot(vector, &self.direction)
    }

    /// Pole predicted for `vector` by the sign of its projection.
    pub fn classify(&self, vector: &[f32]) -> Pole {
        Pole::from_projection(self.project(vector))
    }
}

/// Pole predicted for an already unit-normalized term vector.
pub(crate) fn classify_unit(unit: &[f64], direction: &[f32]) -> Pole {
    let score: f64 = unit.iter().zip(direction).map(|(x, &d)| x * d as f64).sum();
    Pole::from_projection(score)
}
