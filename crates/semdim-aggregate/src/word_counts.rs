//! Per-run term frequencies for a fixed list of terms of interest.
//!
//! Absent terms are `None`, never a sentinel mixed into the count column.

use std::collections::BTreeMap;

use semdim_core::models::RunId;
use semdim_space::VectorSpace;
use serde::{Deserialize, Serialize};

/// A term to count and the group it is reported under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountEntry {
    pub term: String,
    pub group: String,
}

impl WordCountEntry {
    pub fn new(term: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            group: group.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountRow {
    pub term: String,
    pub group: String,
    pub run: RunId,
    pub count: Option<u64>,
}

/// Look up every entry in `space`. Rows follow entry order.
pub fn count_words(space: &VectorSpace, run: RunId, entries: &[WordCountEntry]) -> Vec<WordCountRow> {
    entries
        .iter()
        .map(|e| WordCountRow {
            term: e.term.clone(),
            group: e.group.clone(),
            run,
            count: space.frequency(&e.term),
        })
        .collect()
}

/// Word-count rows grouped by window, plus all rows together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordCountReport {
    pub by_window: BTreeMap<u16, Vec<WordCountRow>>,
    pub combined: Vec<WordCountRow>,
}

impl WordCountReport {
    pub fn from_rows(rows: impl IntoIterator<Item = WordCountRow>) -> Self {
        let mut report = Self::default();
        for row in rows {
            report
                .by_window
                .entry(row.run.window)
                .or_default()
                .push(row.clone());
            report.combined.push(row);
        }
        report
    }

    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// Rows where the term was missing from its run's vocabulary.
    pub fn missing(&self) -> impl Iterator<Item = &WordCountRow> {
        self.combined.iter().filter(|r| r.count.is_none())
    }
}
