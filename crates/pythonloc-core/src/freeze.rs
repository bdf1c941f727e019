//! `pip freeze` capture and the local-minus-global difference.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

fn requirement_set(output: &str) -> BTreeSet<&str> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Requirements present in `local` but not in `global`, sorted.
pub fn diff_requirements(local: &str, global: &str) -> Vec<String> {
    let global = requirement_set(global);
    requirement_set(local)
        .difference(&global)
        .map(|s| s.to_string())
        .collect()
}

/// Run `<python> -m pip freeze` and return its stdout.
///
/// `env: None` runs under the inherited environment; `Some` replaces it
/// entirely. The child is killed and reaped if its output cannot be read
/// or is not UTF-8.
pub fn capture_freeze(python: &Path, env: Option<&BTreeMap<OsString, OsString>>) -> Result<String> {
    let mut cmd = Command::new(python);
    cmd.args(["-m", "pip", "freeze"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());
    if let Some(env) = env {
        cmd.env_clear().envs(env);
    }
    let mut child = cmd.spawn().map_err(|e| {
        tracing::debug!("spawning {} failed: {}", python.display(), e);
        Error::FreezeCapture
    })?;

    let mut raw = Vec::new();
    let read = match child.stdout.take() {
        Some(mut stdout) => stdout.read_to_end(&mut raw).map(|_| ()),
        None => Err(std::io::Error::other("stdout not captured")),
    };
    let decoded = read
        .map_err(|e| e.to_string())
        .and_then(|()| String::from_utf8(raw).map_err(|e| e.to_string()));

    match decoded {
        Ok(output) => {
            let status = child.wait().map_err(|e| {
                tracing::debug!("waiting for pip freeze failed: {}", e);
                Error::FreezeCapture
            })?;
            if !status.success() {
                tracing::warn!("pip freeze exited with {}", status);
            }
            Ok(output)
        }
        Err(reason) => {
            tracing::debug!("pip freeze output unreadable: {}", reason);
            let _ = child.kill();
            let _ = child.wait();
            Err(Error::FreezeCapture)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_local_only() {
        let diff = diff_requirements("foo==1.0\nbar==2.0\n", "bar==2.0\n");
        assert_eq!(diff, vec!["foo==1.0".to_string()]);
    }

    #[test]
    fn test_diff_sorted_and_deduplicated() {
        let local = "zope==5\nattrs==23.1\nzope==5\nsix==1.16\n";
        let global = "six==1.16\n";
        assert_eq!(diff_requirements(local, global), vec!["attrs==23.1", "zope==5"]);
    }

    #[test]
    fn test_diff_ignores_blank_lines_and_crlf() {
        let diff = diff_requirements("a==1\r\n\r\nb==2\r\n", "b==2\n");
        assert_eq!(diff, vec!["a==1"]);
    }

    #[test]
    fn test_diff_nothing_local() {
        assert!(diff_requirements("x==1\n", "x==1\ny==2\n").is_empty());
    }

    #[test]
    fn test_capture_missing_interpreter() {
        let err = capture_freeze(Path::new("/nonexistent/pythonloc/python"), None).unwrap_err();
        assert!(matches!(err, Error::FreezeCapture));
    }
}
