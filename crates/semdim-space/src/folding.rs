//! Term folding: merge a canonical term and a variant into one
//! frequency-weighted composite entry.

use semdim_core::errors::SpaceError;
use semdim_core::models::TermFoldSpec;
use tracing::debug;

use crate::math;
use crate::space::VectorSpace;

/// The composite produced by folding two vocabulary entries.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldOutcome {
    /// Unit-length composite vector.
    pub vector: Vec<f32>,
    /// `f_target + f_synonym`, saturating at `u64::MAX`.
    pub frequency: u64,
    /// Weight on the target's unit vector.
    pub target_weight: f64,
    /// Weight on the synonym's unit vector.
    pub synonym_weight: f64,
}

/// Folds term pairs into composite vocabulary entries.
pub struct TermFolder;

impl TermFolder {
    /// Compute the composite of `target` and `synonym` without touching the space.
    ///
    /// Each source vector is L2-normalized, weighted by its share of the
    /// combined frequency, summed, and normalized again. Two zero-count terms
    /// are weighted equally.
    ///
    /// # Errors
    /// `TermNotFound` if either term is missing; a missing variant means the
    /// run's vocabulary does not match the fold definition.
    /// `ZeroVector` if a source vector or the composite cannot be normalized.
    pub fn compose(
        space: &VectorSpace,
        target: &str,
        synonym: &str,
    ) -> Result<FoldOutcome, SpaceError> {
        let f_t = space.frequency_of(target)?;
        let f_s = space.frequency_of(synonym)?;
        let unit_t = math::unit(space.vector_of(target)?).ok_or_else(|| zero(target))?;
        let unit_s = math::unit(space.vector_of(synonym)?).ok_or_else(|| zero(synonym))?;

        let total = f_t.saturating_add(f_s);
        let (w_t, w_s) = if total == 0 {
            (0.5, 0.5)
        } else {
            (f_t as f64 / total as f64, f_s as f64 / total as f64)
        };

        let combined: Vec<f64> = unit_t
            .iter()
            .zip(&unit_s)
            .map(|(t, s)| w_t * t + w_s * s)
            .collect();
        let vector = math::unit_from_f64(&combined)
            .ok_or_else(|| zero(&format!("{target}+{synonym}")))?;

        Ok(FoldOutcome {
            vector,
            frequency: total,
            target_weight: w_t,
            synonym_weight: w_s,
        })
    }

    /// Fold one spec and register the composite in `space`, overwriting any
    /// existing entry with that name.
    pub fn fold(space: &mut VectorSpace, spec: &TermFoldSpec) -> Result<FoldOutcome, SpaceError> {
        let outcome = Self::compose(space, &spec.target, &spec.synonym)?;
        space.insert_or_replace(&spec.composite, outcome.vector.clone(), outcome.frequency)?;
        debug!(
            composite = %spec.composite,
            target_weight = outcome.target_weight,
            synonym_weight = outcome.synonym_weight,
            frequency = outcome.frequency,
            "folded composite term"
        );
        Ok(outcome)
    }

    /// Fold every spec in order. Stops at the first failure.
    pub fn fold_all(space: &mut VectorSpace, specs: &[TermFoldSpec]) -> Result<(), SpaceError> {
        for spec in specs {
            Self::fold(space, spec)?;
        }
        Ok(())
    }
}

fn zero(term: &str) -> SpaceError {
    SpaceError::ZeroVector {
        term: term.to_string(),
    }
}
