use serde::{Deserialize, Serialize};

use super::defaults;

/// Run scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Stop at the first failed run instead of recording it and continuing.
    pub fail_fast: bool,
    /// Worker threads; 0 uses the global rayon pool.
    pub threads: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            fail_fast: defaults::DEFAULT_FAIL_FAST,
            threads: defaults::DEFAULT_THREADS,
        }
    }
}
