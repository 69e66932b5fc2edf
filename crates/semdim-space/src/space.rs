//! VectorSpace: one trained embedding model held in memory.
//!
//! Terms are addressed by their lowercase form. Insertion order is kept so
//! that neighbor ties resolve deterministically. The only mutation is
//! [`VectorSpace::insert_or_replace`], used to register folded composites.

use std::borrow::Cow;
use std::collections::HashMap;

use semdim_core::errors::SpaceError;
use serde::{Deserialize, Serialize};

use crate::math;

/// A vocabulary term and its cosine similarity to a query vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub term: String,
    pub similarity: f64,
}

#[derive(Debug, Clone)]
struct Entry {
    term: String,
    vector: Vec<f32>,
    frequency: u64,
}

/// Term → (vector, frequency) lookup over a fixed-dimension vocabulary.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    dims: usize,
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl VectorSpace {
    /// An empty space whose vectors all have `dims` components.
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a space from `(term, vector, frequency)` triples.
    ///
    /// # Errors
    /// `DimensionMismatch` if any vector differs in length from the first.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, SpaceError>
    where
        I: IntoIterator<Item = (S, Vec<f32>, u64)>,
        S: AsRef<str>,
    {
        let mut iter = entries.into_iter().peekable();
        let dims = iter.peek().map(|(_, v, _)| v.len()).unwrap_or(0);
        let mut space = Self::new(dims);
        for (term, vector, frequency) in iter {
            space.insert_or_replace(term.as_ref(), vector, frequency)?;
        }
        Ok(space)
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(normalize_key(term).as_ref())
    }

    /// Vocabulary in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.term.as_str())
    }

    /// Vector for `term`, case-insensitive.
    pub fn vector_of(&self, term: &str) -> Result<&[f32], SpaceError> {
        self.entry(term).map(|e| e.vector.as_slice())
    }

    /// Occurrence count for `term`, case-insensitive.
    pub fn frequency_of(&self, term: &str) -> Result<u64, SpaceError> {
        self.entry(term).map(|e| e.frequency)
    }

    /// Occurrence count, or `None` when the term is outside the vocabulary.
    pub fn frequency(&self, term: &str) -> Option<u64> {
        self.frequency_of(term).ok()
    }

    /// Add `term` or overwrite it in place, keeping its original position.
    ///
    /// Postcondition: `vector_of(term)` returns `vector` and
    /// `frequency_of(term)` returns `frequency`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `vector` does not match the space's dimensionality.
    pub fn insert_or_replace(
        &mut self,
        term: &str,
        vector: Vec<f32>,
        frequency: u64,
    ) -> Result<(), SpaceError> {
        if self.entries.is_empty() && self.dims == 0 {
            self.dims = vector.len();
        }
        if vector.len() != self.dims {
            return Err(SpaceError::DimensionMismatch {
                expected: self.dims,
                actual: vector.len(),
            });
        }
        let key = normalize_key(term).into_owned();
        match self.index.get(&key) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.vector = vector;
                entry.frequency = frequency;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Entry {
                    term: key,
                    vector,
                    frequency,
                });
            }
        }
        Ok(())
    }

    /// The `top_n` terms most cosine-similar to `query`, best first.
    ///
    /// Ties keep vocabulary insertion order. Nothing is excluded, so a query
    /// built from a vocabulary vector finds that term itself.
    pub fn nearest(&self, query: &[f32], top_n: usize) -> Result<Vec<Neighbor>, SpaceError> {
        self.nearest_excluding(query, top_n, &[])
    }

    /// Like [`nearest`](Self::nearest), skipping the listed terms.
    pub fn nearest_excluding(
        &self,
        query: &[f32],
        top_n: usize,
        exclude: &[&str],
    ) -> Result<Vec<Neighbor>, SpaceError> {
        if self.entries.is_empty() {
            return Err(SpaceError::EmptyVocabulary);
        }
        if query.len() != self.dims {
            return Err(SpaceError::DimensionMismatch {
                expected: self.dims,
                actual: query.len(),
            });
        }
        let excluded: Vec<String> = exclude
            .iter()
            .map(|t| normalize_key(t).into_owned())
            .collect();

        let mut scored: Vec<Neighbor> = self
            .entries
            .iter()
            .filter(|e| !excluded.contains(&e.term))
            .map(|e| Neighbor {
                term: e.term.clone(),
                similarity: math::cosine_similarity(query, &e.vector),
            })
            .collect();

        // Stable sort keeps insertion order among equal scores.
        scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        scored.truncate(top_n);
        Ok(scored)
    }

    fn entry(&self, term: &str) -> Result<&Entry, SpaceError> {
        self.index
            .get(normalize_key(term).as_ref())
            .map(|&i| &self.entries[i])
            .ok_or_else(|| SpaceError::TermNotFound {
                term: term.to_string(),
            })
    }
}

fn normalize_key(term: &str) -> Cow<'_, str> {
    if term.chars().any(char::is_uppercase) {
        Cow::Owned(term.to_lowercase())
    } else {
        Cow::Borrowed(term)
    }
}
