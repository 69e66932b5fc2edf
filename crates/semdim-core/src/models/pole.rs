use std::fmt;

use serde::{Deserialize, Serialize};

/// One side of a bipolar construct. A positive projection onto a dimension
/// points toward `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pole {
    A,
    B,
}

impl Pole {
    pub fn other(self) -> Self {
        match self {
            Pole::A => Pole::B,
            Pole::B => Pole::A,
        }
    }

    /// Predicted pole for a projection score. Zero falls to `B`.
    pub fn from_projection(score: f64) -> Self {
        if score > 0.0 {
            Pole::A
        } else {
            Pole::B
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pole::A => write!(f, "A"),
            Pole::B => write!(f, "B"),
        }
    }
}
