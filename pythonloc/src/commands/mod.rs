pub mod freeze;
pub mod pip;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use pythonloc_core::config::InterpreterConfig;
use pythonloc_core::interpreter;
use pythonloc_core::PythonVersion;

/// Interpreter plus its `major.minor`, shared by every entry point.
pub(crate) fn resolve_interpreter() -> Result<(PathBuf, PythonVersion)> {
    let python = interpreter::locate_python(&InterpreterConfig::from_env())?;
    let version = interpreter::probe_version(&python)
        .with_context(|| format!("probing {}", python.display()))?;
    tracing::debug!("interpreter {} is Python {}", python.display(), version);
    Ok((python, version))
}
