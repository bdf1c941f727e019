//! Extra pip flags injected by `piploc`.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// pip releases whose distro patches make `install` default to `--user`;
/// these need `--system` for `--target` to be honoured.
pub const LEGACY_SYSTEM_FLAG_PREFIXES: &[&str] = &["9.0.1", "8.1.1"];

const INSTALL: &str = "install";
const TARGET_FLAG: &str = "--target";
const SYSTEM_FLAG: &str = "--system";

fn contains(args: &[OsString], token: &str) -> bool {
    args.iter().any(|a| a.as_os_str() == OsStr::new(token))
}

/// True when `install` appears anywhere in the arguments.
pub fn is_install(args: &[OsString]) -> bool {
    contains(args, INSTALL)
}

/// Whether this pip version needs `--system` alongside `--target`.
pub fn needs_system_flag(pip_version: &str) -> bool {
    LEGACY_SYSTEM_FLAG_PREFIXES
        .iter()
        .any(|prefix| pip_version.starts_with(prefix))
}

/// Flags appended after the caller's own arguments.
///
/// Only an `install` invocation gets extras. The checks for an existing
/// `--target` / `--system` are exact token matches, so `--target=dir` is
/// not recognised.
pub fn installer_flags(
    args: &[OsString],
    lib_dir: &Path,
    pip_version: Option<&str>,
) -> Vec<OsString> {
    let mut flags = Vec::new();
    if !is_install(args) {
        return flags;
    }
    if !contains(args, TARGET_FLAG) {
        flags.push(OsString::from(TARGET_FLAG));
        flags.push(lib_dir.as_os_str().to_os_string());
    }
    if pip_version.is_some_and(needs_system_flag) && !contains(args, SYSTEM_FLAG) {
        flags.push(OsString::from(SYSTEM_FLAG));
    }
    flags
}
