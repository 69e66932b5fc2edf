/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Norms at or below this are treated as zero and cannot be normalized.
pub const NORM_EPSILON: f64 = 1e-12;
