//! DimensionBuilder: turn two seed term lists into a unit direction.

use semdim_core::errors::DimensionError;
use semdim_core::models::{DimensionSpec, Pole};
use semdim_space::{math, VectorSpace};
use tracing::debug;

use crate::dimension::{Dimension, DimensionMethod, Omission, OmissionReason};

/// A pole's surviving terms and their unit vectors.
pub(crate) struct ResolvedPole {
    pub terms: Vec<String>,
    pub units: Vec<Vec<f64>>,
}

pub struct DimensionBuilder;

impl DimensionBuilder {
    /// Build the dimension described by `spec`.
    pub fn build(
        space: &VectorSpace,
        spec: &DimensionSpec,
        method: DimensionMethod,
    ) -> Result<Dimension, DimensionError> {
        Self::build_from_terms(space, &spec.name, &spec.pole_a, &spec.pole_b, method)
    }

    /// Build a dimension from explicit pole lists.
    ///
    /// Terms missing from the vocabulary (or with zero vectors) are recorded
    /// as omissions. A pole left with no terms is an `EmptyPole` error.
    pub fn build_from_terms<S: AsRef<str>>(
        space: &VectorSpace,
        name: &str,
        pole_a: &[S],
        pole_b: &[S],
        method: DimensionMethod,
    ) -> Result<Dimension, DimensionError> {
        let mut omissions = Vec::new();
        let a = resolve_pole(space, pole_a, Pole::A, &mut omissions);
        let b = resolve_pole(space, pole_b, Pole::B, &mut omissions);

        if let Some(term) = a.terms.iter().find(|t| b.terms.contains(*t)) {
            return Err(DimensionError::OverlappingPoles {
                dimension: name.to_string(),
                term: term.clone(),
            });
        }

        let direction = direction_from_units(name, &a.units, &b.units, method)?;

        if !omissions.is_empty() {
            debug!(
                dimension = name,
                omitted = omissions.len(),
                terms = ?omissions.iter().map(|o| o.term.as_str()).collect::<Vec<_>>(),
                "seed terms omitted"
            );
        }

        Ok(Dimension::new(
            name.to_string(),
            method,
            a.terms,
            b.terms,
            omissions,
            direction,
        ))
    }
}

pub(crate) fn resolve_pole<S: AsRef<str>>(
    space: &VectorSpace,
    terms: &[S],
    pole: Pole,
    omissions: &mut Vec<Omission>,
) -> ResolvedPole {
    let mut resolved = ResolvedPole {
        terms: Vec::with_capacity(terms.len()),
        units: Vec::with_capacity(terms.len()),
    };
    for term in terms {
        let term = term.as_ref().to_lowercase();
        let reason = match space.vector_of(&term) {
            Ok(v) => match math::unit(v) {
                Some(u) => {
                    resolved.terms.push(term);
                    resolved.units.push(u);
                    continue;
                }
                None => OmissionReason::ZeroVector,
            },
            Err(_) => OmissionReason::NotInVocabulary,
        };
        omissions.push(Omission { term, pole, reason });
    }
    resolved
}

/// Normalized difference of the pole means.
pub(crate) fn direction_from_units(
    name: &str,
    pole_a: &[Vec<f64>],
    pole_b: &[Vec<f64>],
    method: DimensionMethod,
) -> Result<Vec<f32>, DimensionError> {
    let empty = |pole| DimensionError::EmptyPole {
        dimension: name.to_string(),
        pole,
    };
    let mean_a = mean(pole_a).ok_or_else(|| empty(Pole::A))?;
    let mean_b = mean(pole_b).ok_or_else(|| empty(Pole::B))?;

    let diff: Vec<f64> = match method {
        DimensionMethod::Larsen => mean_a.iter().zip(&mean_b).map(|(a, b)| a - b).collect(),
    };
    math::unit_from_f64(&diff).ok_or_else(|| DimensionError::DegenerateDirection {
        dimension: name.to_string(),
    })
}

fn mean(units: &[Vec<f64>]) -> Option<Vec<f64>> {
    let first = units.first()?;
    let mut sum = vec![0.0; first.len()];
    for u in units {
        for (s, x) in sum.iter_mut().zip(u) {
            *s += x;
        }
    }
    let n = units.len() as f64;
    Some(sum.into_iter().map(|s| s / n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> VectorSpace {
        VectorSpace::from_entries(vec![
            ("danger", vec![2.0, 0.0, 0.0], 1),
            ("risk", vec![1.0, 1.0, 0.0], 1),
            ("safe", vec![-3.0, 0.0, 0.0], 1),
            ("secure", vec![-1.0, 0.0, 1.0], 1),
            ("void", vec![0.0, 0.0, 0.0], 1),
        ])
        .unwrap()
    }

    #[test]
    fn single_term_poles_point_between_them() {
        let dim = DimensionBuilder::build_from_terms(
            &space(),
            "d",
            &["danger"],
            &["safe"],
            DimensionMethod::Larsen,
        )
        .unwrap();
        assert!((dim.direction()[0] - 1.0).abs() < 1e-6);
        assert!(dim.direction()[1].abs() < 1e-6);
    }

    #[test]
    fn unknown_and_zero_terms_are_omitted() {
        let dim = DimensionBuilder::build_from_terms(
            &space(),
            "d",
            &["danger", "peril", "void"],
            &["safe"],
            DimensionMethod::Larsen,
        )
        .unwrap();
        assert_eq!(dim.pole_a, vec!["danger"]);
        assert_eq!(dim.omissions.len(), 2);
        assert_eq!(dim.omissions[0].reason, OmissionReason::NotInVocabulary);
        assert_eq!(dim.omissions[1].reason, OmissionReason::ZeroVector);
    }

    #[test]
    fn unresolvable_pole_is_empty_pole() {
        let err = DimensionBuilder::build_from_terms(
            &space(),
            "d",
            &["danger"],
            &["haven", "shelter"],
            DimensionMethod::Larsen,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DimensionError::EmptyPole {
                dimension: "d".into(),
                pole: Pole::B
            }
        );
    }

    #[test]
    fn shared_term_is_overlapping() {
        let err = DimensionBuilder::build_from_terms(
            &space(),
            "d",
            &["danger"],
            &["Danger"],
            DimensionMethod::Larsen,
        )
        .unwrap_err();
        assert!(matches!(err, DimensionError::OverlappingPoles { .. }));
    }

    #[test]
    fn coinciding_means_are_degenerate() {
        let twin = VectorSpace::from_entries(vec![
            ("x", vec![1.0, 0.0], 1),
            ("y", vec![4.0, 0.0], 1),
        ])
        .unwrap();
        let err =
            DimensionBuilder::build_from_terms(&twin, "d", &["x"], &["y"], DimensionMethod::Larsen)
                .unwrap_err();
        assert!(matches!(err, DimensionError::DegenerateDirection { .. }));
    }
}
