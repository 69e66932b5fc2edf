//! DimensionValidator: stratified k-fold cross-validation of a dimension.
//!
//! Each pole is split into `k` contiguous folds independently, so every fold
//! holds terms from both poles. For fold `i` a direction is trained on the
//! other `k - 1` folds and every term is classified by the sign of its
//! projection. Counts are pooled across folds before dividing, which weights
//! folds by their size.

use std::ops::Range;

use semdim_core::errors::DimensionError;
use semdim_core::models::{Accuracy, FoldMetrics, Pole};
use semdim_space::VectorSpace;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builder::{direction_from_units, resolve_pole};
use crate::dimension::{classify_unit, Dimension, DimensionMethod};

/// Outcome of cross-validating one dimension in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossValidation {
    pub dimension: String,
    pub requested_k: usize,
    /// Folds actually used; below `requested_k` when the smaller pole is short.
    pub effective_k: usize,
    pub folds: Vec<FoldMetrics>,
    /// In-sample counts pooled over all folds.
    pub train: Accuracy,
    /// Out-of-sample counts pooled over all folds.
    pub holdout: Accuracy,
}

impl CrossValidation {
    pub fn k_adjusted(&self) -> bool {
        self.effective_k != self.requested_k
    }

    /// Training predictions made, pooled over folds.
    pub fn train_accuracy_n(&self) -> usize {
        self.train.total
    }

    pub fn train_correct(&self) -> usize {
        self.train.correct
    }

    pub fn train_accuracy_percent(&self) -> f64 {
        self.train.percent()
    }

    /// Holdout predictions made; every resolved term is held out once.
    pub fn holdout_accuracy_n(&self) -> usize {
        self.holdout.total
    }

    pub fn holdout_correct(&self) -> usize {
        self.holdout.correct
    }

    pub fn holdout_accuracy_percent(&self) -> f64 {
        self.holdout.percent()
    }
}

pub struct DimensionValidator;

impl DimensionValidator {
    /// Cross-validate a built dimension over its resolved terms.
    pub fn validate(
        space: &VectorSpace,
        dimension: &Dimension,
        k: usize,
    ) -> Result<CrossValidation, DimensionError> {
        Self::validate_terms(
            space,
            &dimension.name,
            &dimension.pole_a,
            &dimension.pole_b,
            k,
            dimension.method,
        )
    }

    /// Cross-validate explicit pole lists. Unresolvable terms are dropped.
    ///
    /// # Errors
    /// `EmptyPole` if a pole resolves to nothing. `InvalidFoldCount` if
    /// `k < 2` or the smaller pole has fewer than 2 terms, since no split
    /// could leave a non-empty training set.
    pub fn validate_terms<S: AsRef<str>>(
        space: &VectorSpace,
        name: &str,
        pole_a: &[S],
        pole_b: &[S],
        k: usize,
        method: DimensionMethod,
    ) -> Result<CrossValidation, DimensionError> {
        let mut omissions = Vec::new();
        let a = resolve_pole(space, pole_a, Pole::A, &mut omissions);
        let b = resolve_pole(space, pole_b, Pole::B, &mut omissions);
        if !omissions.is_empty() {
            debug!(dimension = name, omitted = omissions.len(), "validation terms omitted");
        }
        for (pole, resolved) in [(Pole::A, &a), (Pole::B, &b)] {
            if resolved.units.is_empty() {
                return Err(DimensionError::EmptyPole {
                    dimension: name.to_string(),
                    pole,
                });
            }
        }

        let smaller = a.units.len().min(b.units.len());
        if k < 2 || smaller < 2 {
            return Err(DimensionError::InvalidFoldCount {
                requested: k,
                smaller_pole: smaller,
            });
        }
        let effective_k = k.min(smaller);
        if effective_k < k {
            warn!(
                dimension = name,
                requested = k,
                effective = effective_k,
                "fold count reduced to smaller pole size"
            );
        }

        let folds_a = fold_ranges(a.units.len(), effective_k);
        let folds_b = fold_ranges(b.units.len(), effective_k);

        let mut result = CrossValidation {
            dimension: name.to_string(),
            requested_k: k,
            effective_k,
            folds: Vec::with_capacity(effective_k),
            train: Accuracy::default(),
            holdout: Accuracy::default(),
        };

        for fold in 0..effective_k {
            let train_a = outside(&a.units, &folds_a[fold]);
            let train_b = outside(&b.units, &folds_b[fold]);
            let direction = direction_from_units(name, &train_a, &train_b, method)?;

            let mut metrics = FoldMetrics {
                fold,
                ..FoldMetrics::default()
            };
            for (pole, units, holdout) in [
                (Pole::A, &a.units, &folds_a[fold]),
                (Pole::B, &b.units, &folds_b[fold]),
            ] {
                for (i, unit) in units.iter().enumerate() {
                    let correct = usize::from(classify_unit(unit, &direction) == pole);
                    if holdout.contains(&i) {
                        metrics.holdout_n += 1;
                        metrics.holdout_correct += correct;
                    } else {
                        metrics.train_n += 1;
                        metrics.train_correct += correct;
                    }
                }
            }

            result.train.add(metrics.train_correct, metrics.train_n);
            result.holdout.add(metrics.holdout_correct, metrics.holdout_n);
            result.folds.push(metrics);
        }

        debug!(
            dimension = name,
            k = effective_k,
            train = result.train.percent(),
            holdout = result.holdout.percent(),
            "cross-validated dimension"
        );
        Ok(result)
    }
}

/// Contiguous fold ranges over `n` items. The first `n % k` folds get one
/// extra item.
pub fn fold_ranges(n: usize, k: usize) -> Vec<Range<usize>> {
    let base = n / k;
    let extra = n % k;
    let mut start = 0;
    (0..k)
        .map(|i| {
            let len = base + usize::from(i < extra);
            let range = start..start + len;
            start += len;
            range
        })
        .collect()
}

fn outside(units: &[Vec<f64>], held: &Range<usize>) -> Vec<Vec<f64>> {
    units
        .iter()
        .enumerate()
        .filter(|(i, _)| !held.contains(i))
        .map(|(_, u)| u.clone())
        .collect()
}
