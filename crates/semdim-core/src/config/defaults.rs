// Single source of truth for all default values.

// --- Study ---
pub const DEFAULT_FIRST_WINDOW: u16 = 1980;
pub const DEFAULT_LAST_WINDOW: u16 = 2016;
pub const DEFAULT_WINDOW_SPAN: u16 = 3;
pub const DEFAULT_RESAMPLE_COUNT: u32 = 25;
pub const DEFAULT_MODEL_PREFIX: &str = "CBOW_300d__win10_min50_iter3";
pub const DEFAULT_MODEL_ROOT: &str = "models";

// --- Validation ---
pub const DEFAULT_FOLDS: usize = 10;
pub const DEFAULT_NEIGHBOR_COUNT: usize = 10;

// --- Aggregation ---
pub const DEFAULT_FAIL_FAST: bool = false;
pub const DEFAULT_THREADS: usize = 0; // 0 = rayon default

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Window start years, one every `DEFAULT_WINDOW_SPAN` years.
pub fn default_windows() -> Vec<u16> {
    (DEFAULT_FIRST_WINDOW..=DEFAULT_LAST_WINDOW)
        .step_by(DEFAULT_WINDOW_SPAN as usize)
        .collect()
}

pub fn default_resamples() -> Vec<u32> {
    (0..DEFAULT_RESAMPLE_COUNT).collect()
}
