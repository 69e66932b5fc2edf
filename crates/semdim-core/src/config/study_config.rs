use serde::{Deserialize, Serialize};

use super::defaults;

/// Which models make up a study.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Start year of each time window.
    pub windows: Vec<u16>,
    /// Years covered by each window, inclusive of the start year.
    pub window_span: u16,
    /// Bootstrap resample indices evaluated in every window.
    pub resamples: Vec<u32>,
    /// File name prefix shared by every trained model.
    pub model_prefix: String,
    /// Directory holding the trained models.
    pub model_root: String,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            windows: defaults::default_windows(),
            window_span: defaults::DEFAULT_WINDOW_SPAN,
            resamples: defaults::default_resamples(),
            model_prefix: defaults::DEFAULT_MODEL_PREFIX.to_string(),
            model_root: defaults::DEFAULT_MODEL_ROOT.to_string(),
        }
    }
}

impl StudyConfig {
    /// Last year covered by the window starting at `start`.
    pub fn window_end(&self, start: u16) -> u16 {
        start + self.window_span.saturating_sub(1)
    }
}
