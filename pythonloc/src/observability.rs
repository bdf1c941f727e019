//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for PYTHONLOC_QUIET, PYTHONLOC_LOG_LEVEL,
//! PYTHONLOC_LOG_JSON. Logs go to stderr; stdout belongs to the wrapped program.

use pythonloc_core::config::ObservabilityConfig;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing. Call once at process startup.
/// When PYTHONLOC_QUIET=1 only errors are logged.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        "pythonloc=error,pythonloc_core=error".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}
