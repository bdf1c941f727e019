//! Locate the script argument in an interpreter command line.

use std::ffi::OsString;
use std::path::{self, Component, Path, PathBuf};

/// Fold `.` and `..` without touching the filesystem. `..` at the root stays
/// at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// First argument that does not start with `-`, made absolute and lexically
/// normalized.
///
/// Option values are not skipped: in `-W ignore run.py` the detected token is
/// `ignore`.
pub fn detect_script(args: &[OsString]) -> Option<PathBuf> {
    let first = args
        .iter()
        .find(|arg| !arg.to_string_lossy().starts_with('-'))?;
    let candidate = PathBuf::from(first);
    match path::absolute(&candidate) {
        Ok(abs) => Some(normalize_lexically(&abs)),
        Err(e) => {
            tracing::debug!("could not make {} absolute: {}", candidate.display(), e);
            Some(candidate)
        }
    }
}
