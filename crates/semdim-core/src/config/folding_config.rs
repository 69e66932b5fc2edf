use serde::{Deserialize, Serialize};

use crate::models::TermFoldSpec;

/// Composite terms registered in every vector space before dimensions are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldingConfig {
    pub terms: Vec<TermFoldSpec>,
}

impl Default for FoldingConfig {
    fn default() -> Self {
        Self {
            terms: TermFoldSpec::standard_set(),
        }
    }
}
