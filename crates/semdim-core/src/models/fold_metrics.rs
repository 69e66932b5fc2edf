use serde::{Deserialize, Serialize};

/// Classification counts for one cross-validation fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FoldMetrics {
    pub fold: usize,
    pub train_n: usize,
    pub train_correct: usize,
    pub holdout_n: usize,
    pub holdout_correct: usize,
}

/// Correct over total, pooled across folds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Accuracy {
    pub correct: usize,
    pub total: usize,
}

impl Accuracy {
    pub fn add(&mut self, correct: usize, total: usize) {
        self.correct += correct;
        self.total += total;
    }

    /// Fraction correct; `0.0` when nothing was classified.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}
