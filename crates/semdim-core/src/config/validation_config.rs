use serde::{Deserialize, Serialize};

use super::defaults;

/// Cross-validation and neighbor extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Requested fold count. Reduced per dimension when a pole is smaller.
    pub folds: usize,
    /// Terms kept in each most/least similar list.
    pub neighbor_count: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            folds: defaults::DEFAULT_FOLDS,
            neighbor_count: defaults::DEFAULT_NEIGHBOR_COUNT,
        }
    }
}
