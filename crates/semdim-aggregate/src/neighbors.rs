//! Cross-run tallies of the terms nearest each end of a dimension.

use std::collections::HashMap;

use semdim_dimensions::DimensionNeighbors;
use semdim_space::Neighbor;
use serde::{Deserialize, Serialize};

/// Which end of a dimension a neighbor list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborEnd {
    /// `mostsim_<dim>`: nearest to the direction.
    Most,
    /// `leastsim_<dim>`: nearest to the negated direction.
    Least,
}

impl NeighborEnd {
    pub fn metric_name(self, dimension: &str) -> String {
        match self {
            NeighborEnd::Most => format!("mostsim_{dimension}"),
            NeighborEnd::Least => format!("leastsim_{dimension}"),
        }
    }
}

/// How often a term showed up in one neighbor list across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub term: String,
    pub occurrences: usize,
    pub mean_similarity: f64,
}

/// Accumulates neighbor lists for one dimension end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborTally {
    pub dimension: String,
    pub end: NeighborEnd,
    pub runs: usize,
    entries: Vec<TallyEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl NeighborTally {
    pub fn new(dimension: impl Into<String>, end: NeighborEnd) -> Self {
        Self {
            dimension: dimension.into(),
            end,
            runs: 0,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add one run's list.
    pub fn add_run(&mut self, neighbors: &[Neighbor]) {
        self.runs += 1;
        for n in neighbors {
            let slot = match self.index.get(&n.term) {
                Some(&i) => i,
                None => {
                    self.index.insert(n.term.clone(), self.entries.len());
                    self.entries.push(TallyEntry {
                        term: n.term.clone(),
                        occurrences: 0,
                        mean_similarity: 0.0,
                    });
                    self.entries.len() - 1
                }
            };
            let entry = &mut self.entries[slot];
            entry.occurrences += 1;
            // Running mean.
            entry.mean_similarity +=
                (n.similarity - entry.mean_similarity) / entry.occurrences as f64;
        }
    }

    /// Entries by occurrence count, most frequent first; ties keep first appearance.
    pub fn ranked(&self) -> Vec<TallyEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        ranked
    }

    pub fn metric_name(&self) -> String {
        self.end.metric_name(&self.dimension)
    }
}

/// Tallies for both ends of every dimension, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborTallies {
    tallies: Vec<NeighborTally>,
}

impl NeighborTallies {
    pub fn add(&mut self, neighbors: &DimensionNeighbors) {
        for (end, list) in [
            (NeighborEnd::Most, &neighbors.most_similar),
            (NeighborEnd::Least, &neighbors.least_similar),
        ] {
            self.tally_mut(&neighbors.dimension, end).add_run(list);
        }
    }

    pub fn get(&self, dimension: &str, end: NeighborEnd) -> Option<&NeighborTally> {
        self.tallies
            .iter()
            .find(|t| t.dimension == dimension && t.end == end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NeighborTally> {
        self.tallies.iter()
    }

    fn tally_mut(&mut self, dimension: &str, end: NeighborEnd) -> &mut NeighborTally {
        let pos = self
            .tallies
            .iter()
            .position(|t| t.dimension == dimension && t.end == end);
        let i = match pos {
            Some(i) => i,
            None => {
                self.tallies.push(NeighborTally::new(dimension, end));
                self.tallies.len() - 1
            }
        };
        &mut self.tallies[i]
    }
}
