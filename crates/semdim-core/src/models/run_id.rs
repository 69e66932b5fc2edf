use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one trained model: a time window (by its start year) and a
/// bootstrap resample index within that window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId {
    pub window: u16,
    pub resample: u32,
}

impl RunId {
    pub fn new(window: u16, resample: u32) -> Self {
        Self { window, resample }
    }

    /// Every (window, resample) pair, window-major.
    pub fn grid(windows: &[u16], resamples: &[u32]) -> Vec<RunId> {
        windows
            .iter()
            .flat_map(|&w| resamples.iter().map(move |&r| RunId::new(w, r)))
            .collect()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#boot{}", self.window, self.resample)
    }
}
