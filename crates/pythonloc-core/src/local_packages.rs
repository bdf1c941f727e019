//! `__pypackages__` location (PEP 582).

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory name holding project-local packages.
pub const PYPACKAGES_DIR: &str = "__pypackages__";

/// Interpreter `major.minor`; keys the per-version library directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl PythonVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `"3.11"` (surrounding whitespace allowed). Extra components are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let (major, minor) = s.trim().split_once('.')?;
        Some(Self {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// `<dir of script>/__pypackages__/<M.m>/lib`, or the same path relative to
/// the working directory when there is no script.
pub fn local_lib_dir(script: Option<&Path>, version: &PythonVersion) -> PathBuf {
    let base = script
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_default();
    base.join(PYPACKAGES_DIR)
        .join(version.to_string())
        .join("lib")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(PythonVersion::parse("3.11\n"), Some(PythonVersion::new(3, 11)));
        assert_eq!(PythonVersion::parse("2.7"), Some(PythonVersion::new(2, 7)));
        assert_eq!(PythonVersion::parse("3"), None);
        assert_eq!(PythonVersion::parse("3.11.2"), None);
        assert_eq!(PythonVersion::parse("Python 3.11"), None);
    }

    #[test]
    fn test_lib_dir_without_script_is_relative() {
        let dir = local_lib_dir(None, &PythonVersion::new(3, 8));
        assert_eq!(dir, Path::new("__pypackages__").join("3.8").join("lib"));
        assert!(dir.is_relative());
    }

    #[cfg(unix)]
    #[test]
    fn test_lib_dir_next_to_script() {
        let dir = local_lib_dir(
            Some(Path::new("/srv/app/run.py")),
            &PythonVersion::new(3, 12),
        );
        assert_eq!(dir, PathBuf::from("/srv/app/__pypackages__/3.12/lib"));
    }

    #[test]
    fn test_bare_filename_uses_current_dir_form() {
        let v = PythonVersion::new(3, 10);
        assert_eq!(
            local_lib_dir(Some(Path::new("run.py")), &v),
            local_lib_dir(None, &v)
        );
    }

    #[test]
    fn test_lib_dir_deterministic() {
        let v = PythonVersion::new(3, 9);
        let script = Path::new("project").join("main.py");
        assert_eq!(
            local_lib_dir(Some(&script), &v),
            local_lib_dir(Some(&script), &v)
        );
    }
}
