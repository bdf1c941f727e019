//! Environment variable keys and aliases.
//!
//! Primary keys use the `PYTHONLOC_*` prefix.

/// Module search path rewritten for the child process.
pub const PYTHONPATH: &str = "PYTHONPATH";

/// Interpreter selection
pub mod interpreter {
    /// No generic `PYTHON` alias: other build tools set it for their own use.
    pub const PYTHONLOC_PYTHON: &str = "PYTHONLOC_PYTHON";
}

/// Logging
pub mod observability {
    pub const PYTHONLOC_QUIET: &str = "PYTHONLOC_QUIET";
    pub const PYTHONLOC_LOG_LEVEL: &str = "PYTHONLOC_LOG_LEVEL";
    pub const PYTHONLOC_LOG_JSON: &str = "PYTHONLOC_LOG_JSON";
}
