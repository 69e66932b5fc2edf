use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::DimensionError;

/// One parsed row of a seed lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub term: String,
    /// Pole label, e.g. "dangerous" or "safe".
    pub pole: String,
    /// Rows flagged for removal are ignored.
    #[serde(default)]
    pub removed: bool,
}

impl SeedRecord {
    pub fn new(term: impl Into<String>, pole: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            pole: pole.into(),
            removed: false,
        }
    }

    pub fn removed(mut self) -> Self {
        self.removed = true;
        self
    }
}

/// A named bipolar construct before it is resolved against a vector space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub name: String,
    pub pole_a: Vec<String>,
    pub pole_b: Vec<String>,
}

impl DimensionSpec {
    pub fn new<A, B, S>(name: impl Into<String>, pole_a: A, pole_b: B) -> Self
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            pole_a: normalize_terms(pole_a),
            pole_b: normalize_terms(pole_b),
        }
    }

    /// Collect pole term lists from seed records by pole label.
    ///
    /// Terms are trimmed and lowercased, removed rows are skipped, and
    /// duplicates keep their first position.
    pub fn from_seed_records(
        name: impl Into<String>,
        pole_a_label: &str,
        pole_b_label: &str,
        records: &[SeedRecord],
    ) -> Result<Self, DimensionError> {
        let pick = |label: &str| {
            records
                .iter()
                .filter(|r| !r.removed && r.pole.trim().eq_ignore_ascii_case(label))
                .map(|r| r.term.as_str())
                .collect::<Vec<_>>()
        };
        let spec = Self::new(name, pick(pole_a_label), pick(pole_b_label));
        spec.check_disjoint()?;
        Ok(spec)
    }

    /// Poles must not share a term.
    pub fn check_disjoint(&self) -> Result<(), DimensionError> {
        let a: HashSet<&str> = self.pole_a.iter().map(String::as_str).collect();
        match self.pole_b.iter().find(|t| a.contains(t.as_str())) {
            Some(term) => Err(DimensionError::OverlappingPoles {
                dimension: self.name.clone(),
                term: term.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Build the four stigma dimensions from one combined lexicon.
    pub fn standard_set(records: &[SeedRecord]) -> Result<Vec<DimensionSpec>, DimensionError> {
        STANDARD_DIMENSIONS
            .iter()
            .map(|(name, a, b)| Self::from_seed_records(*name, a, b, records))
            .collect()
    }
}

/// (name, pole A label, pole B label) for the standard study.
pub const STANDARD_DIMENSIONS: [(&str, &str, &str); 4] = [
    ("danger", "dangerous", "safe"),
    ("disgust", "disgusting", "enticing"),
    ("purity", "impure", "pure"),
    ("negpos", "neg", "pos"),
];

/// A pair of dimensions whose directions are compared every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSpec {
    /// Metric label, e.g. "pure_danger" becomes `cossim_pure_danger`.
    pub label: String,
    pub first: String,
    pub second: String,
}

impl ComparisonSpec {
    pub fn new(
        label: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn standard_set() -> Vec<ComparisonSpec> {
        vec![
            ComparisonSpec::new("pure_danger", "purity", "danger"),
            ComparisonSpec::new("pure_disgust", "purity", "disgust"),
            ComparisonSpec::new("pure_negpos", "purity", "negpos"),
            ComparisonSpec::new("danger_disgust", "danger", "disgust"),
            ComparisonSpec::new("negpos_disgust", "negpos", "disgust"),
            ComparisonSpec::new("negpos_danger", "negpos", "danger"),
        ]
    }
}

fn normalize_terms<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_records_drop_removed_and_lowercase() {
        let records = vec![
            SeedRecord::new("Danger", "dangerous"),
            SeedRecord::new("risk ", "dangerous"),
            SeedRecord::new("menace", "dangerous").removed(),
            SeedRecord::new("Safe", "safe"),
            SeedRecord::new("danger", "dangerous"),
        ];
        let spec = DimensionSpec::from_seed_records("danger", "dangerous", "safe", &records).unwrap();
        assert_eq!(spec.pole_a, vec!["danger", "risk"]);
        assert_eq!(spec.pole_b, vec!["safe"]);
    }

    #[test]
    fn overlapping_poles_rejected() {
        let records = vec![
            SeedRecord::new("calm", "safe"),
            SeedRecord::new("Calm", "dangerous"),
        ];
        let err = DimensionSpec::from_seed_records("danger", "dangerous", "safe", &records).unwrap_err();
        assert!(matches!(err, DimensionError::OverlappingPoles { ref term, .. } if term == "calm"));
    }

    #[test]
    fn standard_set_orders_poles_like_the_study() {
        let records = vec![
            SeedRecord::new("filthy", "impure"),
            SeedRecord::new("clean", "pure"),
        ];
        let specs = DimensionSpec::standard_set(&records).unwrap();
        assert_eq!(specs.len(), 4);
        let purity = specs.iter().find(|s| s.name == "purity").unwrap();
        assert_eq!(purity.pole_a, vec!["filthy"]);
        assert_eq!(purity.pole_b, vec!["clean"]);
    }
}
