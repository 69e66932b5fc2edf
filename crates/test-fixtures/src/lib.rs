//! Test fixtures for the semantic dimension engine.
//!
//! Provides JSON fixture loading, deterministic synthetic vector spaces,
//! and an in-memory embedding store for integration tests across crates.

use std::collections::HashMap;
use std::path::PathBuf;

use semdim_core::errors::StoreError;
use semdim_core::models::RunId;
use semdim_space::{IEmbeddingStore, VectorSpace};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

#[derive(Debug, Deserialize)]
struct SpaceFixture {
    #[allow(dead_code)]
    description: String,
    dims: usize,
    terms: Vec<TermFixture>,
}

#[derive(Debug, Deserialize)]
struct TermFixture {
    term: String,
    count: u64,
    vector: Vec<f32>,
}

/// Load a vector space from `spaces/<name>.json`.
pub fn load_space(name: &str) -> VectorSpace {
    let fixture: SpaceFixture = load_fixture(&format!("spaces/{name}.json"));
    let mut space = VectorSpace::new(fixture.dims);
    for t in fixture.terms {
        space
            .insert_or_replace(&t.term, t.vector, t.count)
            .unwrap_or_else(|e| panic!("bad fixture term {}: {e}", t.term));
    }
    space
}

/// The four-axis stigma toy space.
pub fn stigma_toy_space() -> VectorSpace {
    load_space("stigma_toy")
}

/// Deterministic value in `[-0.5, 0.5)` for a (seed, i, j) triple.
pub fn wobble(seed: u64, i: usize, j: usize) -> f32 {
    let mut x = seed
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add((i as u64).wrapping_mul(1_442_695_040_888_963_407))
        .wrapping_add((j as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    (x % 10_000) as f32 / 10_000.0 - 0.5
}

/// A space with `per_pole` terms clustered near `+e0` (`a0`, `a1`, ...),
/// `per_pole` near `-e0` (`b0`, ...), and `noise` terms spread elsewhere.
pub fn bipolar_space(per_pole: usize, noise: usize, dims: usize, seed: u64) -> VectorSpace {
    assert!(dims >= 2, "bipolar space needs at least two dims");
    let mut space = VectorSpace::new(dims);
    let mut row = 0usize;
    let mut push = |space: &mut VectorSpace, term: String, axis: f32| {
        let mut v: Vec<f32> = (0..dims).map(|j| 0.3 * wobble(seed, row, j)).collect();
        v[0] += axis;
        let count = 10 + (row as u64 * 13) % 90;
        space
            .insert_or_replace(&term, v, count)
            .expect("synthetic vectors share dims");
        row += 1;
    };
    for i in 0..per_pole {
        push(&mut space, format!("a{i}"), 1.0);
    }
    for i in 0..per_pole {
        push(&mut space, format!("b{i}"), -1.0);
    }
    for i in 0..noise {
        push(&mut space, format!("n{i}"), 0.0);
    }
    space
}

/// Copy of `space` with every component nudged by up to `amount / 2`.
pub fn jitter_space(space: &VectorSpace, seed: u64, amount: f32) -> VectorSpace {
    let mut out = VectorSpace::new(space.dims());
    for (i, term) in space.terms().enumerate() {
        let v: Vec<f32> = space
            .vector_of(term)
            .expect("term from vocabulary")
            .iter()
            .enumerate()
            .map(|(j, x)| x + amount * wobble(seed, i, j))
            .collect();
        let count = space.frequency_of(term).expect("term from vocabulary");
        out.insert_or_replace(term, v, count)
            .expect("jitter preserves dims");
    }
    out
}

/// Embedding store backed by prebuilt spaces. Runs without a space fail to load.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    spaces: HashMap<RunId, VectorSpace>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(mut self, run: RunId, space: VectorSpace) -> Self {
        self.spaces.insert(run, space);
        self
    }

    /// One jittered copy of `base` per run, seeded by the run.
    pub fn jittered(base: &VectorSpace, runs: &[RunId], amount: f32) -> Self {
        let spaces = runs
            .iter()
            .map(|&run| {
                let seed = (run.window as u64) << 32 | run.resample as u64;
                (run, jitter_space(base, seed, amount))
            })
            .collect();
        Self { spaces }
    }
}

impl IEmbeddingStore for InMemoryStore {
    fn load(&self, run: RunId) -> Result<VectorSpace, StoreError> {
        self.spaces
            .get(&run)
            .cloned()
            .ok_or_else(|| StoreError::ModelLoadError {
                path: format!("memory://{run}"),
                reason: "no model for run".to_string(),
            })
    }

    fn name(&self) -> &str {
        "memory"
    }
}
