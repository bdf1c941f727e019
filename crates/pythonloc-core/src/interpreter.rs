//! Find the Python interpreter and ask it about itself.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use regex::Regex;

use crate::config::InterpreterConfig;
use crate::error::{Error, Result};
use crate::local_packages::PythonVersion;

/// Names searched on `PATH` when no interpreter is configured.
const DEFAULT_CANDIDATES: &[&str] = &["python3", "python"];

const VERSION_SNIPPET: &str = "import sys; print('%d.%d' % sys.version_info[:2])";

/// Resolve the interpreter: configured override first, then `PATH` search.
pub fn locate_python(config: &InterpreterConfig) -> Result<PathBuf> {
    if let Some(ref python) = config.python {
        let candidate = Path::new(python);
        if candidate.components().count() > 1 {
            return Ok(candidate.to_path_buf());
        }
        return which::which(python).map_err(|e| {
            tracing::debug!("PYTHONLOC_PYTHON={} not found: {}", python, e);
            Error::InterpreterNotFound {
                tried: python.clone(),
            }
        });
    }
    for name in DEFAULT_CANDIDATES {
        if let Ok(path) = which::which(name) {
            tracing::debug!("using interpreter {}", path.display());
            return Ok(path);
        }
    }
    Err(Error::InterpreterNotFound {
        tried: DEFAULT_CANDIDATES.join(", "),
    })
}

/// Run the interpreter once to learn its `major.minor`.
pub fn probe_version(python: &Path) -> Result<PythonVersion> {
    let out = Command::new(python)
        .args(["-c", VERSION_SNIPPET])
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::VersionProbe {
            python: python.to_path_buf(),
            reason: e.to_string(),
        })?;
    if !out.status.success() {
        return Err(Error::VersionProbe {
            python: python.to_path_buf(),
            reason: format!(
                "exited with {}: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            ),
        });
    }
    let stdout = String::from_utf8_lossy(&out.stdout);
    PythonVersion::parse(&stdout).ok_or_else(|| Error::VersionProbe {
        python: python.to_path_buf(),
        reason: format!("unexpected output {:?}", stdout.trim()),
    })
}

/// Extract the version from `pip --version` output, e.g.
/// `pip 9.0.1 from /usr/lib/python3/dist-packages (python 3.6)`.
pub fn parse_pip_version(output: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^pip\s+(\S+)").expect("valid regex"));
    re.captures(output.trim_start())
        .map(|c| c[1].to_string())
}

/// `<python> -m pip --version`. `None` when pip is missing or the output is odd.
pub fn probe_pip_version(python: &Path) -> Option<String> {
    let out = Command::new(python)
        .args(["-m", "pip", "--version"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();
    match out {
        Ok(out) if out.status.success() => {
            let version = parse_pip_version(&String::from_utf8_lossy(&out.stdout));
            tracing::debug!("pip version: {:?}", version);
            version
        }
        Ok(out) => {
            tracing::debug!("pip --version exited with {}", out.status);
            None
        }
        Err(e) => {
            tracing::debug!("pip --version failed: {}", e);
            None
        }
    }
}
