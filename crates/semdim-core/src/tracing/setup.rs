//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging with the default level.
///
/// Reads `SEMDIM_LOG` for per-crate levels, e.g.
/// `SEMDIM_LOG=semdim_aggregate=debug,semdim_space=warn`.
/// Idempotent.
pub fn init_tracing() {
    init_tracing_with_level(crate::config::defaults::DEFAULT_LOG_LEVEL);
}

/// Initialize logging, falling back to `level` when `SEMDIM_LOG` is unset or invalid.
pub fn init_tracing_with_level(level: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("SEMDIM_LOG").unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
