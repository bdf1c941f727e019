use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing or launching the wrapped interpreter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no Python interpreter found (tried {tried}); set PYTHONLOC_PYTHON")]
    InterpreterNotFound { tried: String },

    #[error("could not determine version of {python}: {reason}")]
    VersionProbe { python: PathBuf, reason: String },

    #[error("failed to launch {program}")]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run pip freeze")]
    FreezeCapture,
}

pub type Result<T> = std::result::Result<T, Error>;
