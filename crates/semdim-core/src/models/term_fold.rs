use serde::{Deserialize, Serialize};

/// A composite vocabulary entry merged from a canonical term and a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFoldSpec {
    /// Name the composite is registered under.
    pub composite: String,
    pub target: String,
    pub synonym: String,
}

impl TermFoldSpec {
    pub fn new(
        composite: impl Into<String>,
        target: impl Into<String>,
        synonym: impl Into<String>,
    ) -> Self {
        Self {
            composite: composite.into(),
            target: target.into(),
            synonym: synonym.into(),
        }
    }

    /// The disease-term folds used by the stigma study.
    pub fn standard_set() -> Vec<TermFoldSpec> {
        vec![
            TermFoldSpec::new("epilepsy_folded", "epilepsy", "epileptic"),
            TermFoldSpec::new("drug_addiction_folded", "drug_addiction", "drug_addict"),
            TermFoldSpec::new("obesity_folded", "obesity", "obese"),
        ]
    }
}
