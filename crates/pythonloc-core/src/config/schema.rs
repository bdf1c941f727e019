//! Typed settings loaded from the environment.

use super::env_keys::{interpreter as interp_keys, observability as obv_keys};
use super::loader::{env_bool, env_optional, env_or};

/// Which interpreter the shims launch.
#[derive(Debug, Clone, Default)]
pub struct InterpreterConfig {
    /// Explicit interpreter (name or path). `None` means search `PATH`.
    pub python: Option<String>,
}

impl InterpreterConfig {
    pub fn from_env() -> Self {
        Self {
            python: env_optional(interp_keys::PYTHONLOC_PYTHON, &[]),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self {
            quiet: env_bool(obv_keys::PYTHONLOC_QUIET, &[], false),
            log_level: env_or(obv_keys::PYTHONLOC_LOG_LEVEL, &[], || {
                "pythonloc=warn,pythonloc_core=warn".to_string()
            }),
            log_json: env_bool(obv_keys::PYTHONLOC_LOG_JSON, &[], false),
        })
    }
}
