//! Child process environment with `PYTHONPATH` pointing at local packages.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::config::env_keys::PYTHONPATH;

#[cfg(windows)]
pub const PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const PATH_SEPARATOR: &str = ":";

/// `"." SEP <lib_dir> SEP <prior>`; `prior` may be empty.
pub fn pythonpath_value(lib_dir: &Path, prior: Option<&OsStr>) -> OsString {
    let mut value = OsString::from(".");
    value.push(PATH_SEPARATOR);
    value.push(lib_dir.as_os_str());
    value.push(PATH_SEPARATOR);
    if let Some(prior) = prior {
        value.push(prior);
    }
    value
}

/// Copy `ambient` and rewrite `PYTHONPATH`. Every other variable is kept as-is.
pub fn build_env<I>(ambient: I, lib_dir: &Path) -> BTreeMap<OsString, OsString>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env: BTreeMap<OsString, OsString> = ambient.into_iter().collect();
    let value = pythonpath_value(lib_dir, env.get(OsStr::new(PYTHONPATH)).map(OsString::as_os_str));
    env.insert(OsString::from(PYTHONPATH), value);
    env
}

/// [`build_env`] over the current process environment.
pub fn build_env_from_process(lib_dir: &Path) -> BTreeMap<OsString, OsString> {
    build_env(std::env::vars_os(), lib_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
        pairs
            .iter()
            .map(|(k, v)| (OsString::from(k), OsString::from(v)))
            .collect()
    }

    #[test]
    fn test_unset_pythonpath_gets_trailing_separator() {
        let lib = PathBuf::from("__pypackages__/3.11/lib");
        let env = build_env(vars(&[("HOME", "/home/u")]), &lib);
        let expected = format!(
            ".{sep}__pypackages__/3.11/lib{sep}",
            sep = PATH_SEPARATOR
        );
        assert_eq!(env[OsStr::new(PYTHONPATH)], OsString::from(expected));
    }

    #[test]
    fn test_prior_pythonpath_kept_as_suffix() {
        let lib = PathBuf::from("lib");
        let env = build_env(vars(&[(PYTHONPATH, "/opt/site")]), &lib);
        let expected = format!(".{sep}lib{sep}/opt/site", sep = PATH_SEPARATOR);
        assert_eq!(env[OsStr::new(PYTHONPATH)], OsString::from(expected));
    }

    #[test]
    fn test_other_variables_untouched() {
        let ambient = vars(&[("HOME", "/home/u"), ("LANG", "C.UTF-8"), (PYTHONPATH, "x")]);
        let env = build_env(ambient.clone(), Path::new("lib"));
        assert_eq!(env.len(), 3);
        assert_eq!(env[OsStr::new("HOME")], OsString::from("/home/u"));
        assert_eq!(env[OsStr::new("LANG")], OsString::from("C.UTF-8"));
        // input is consumed by value; the caller's copy is unchanged
        assert_eq!(ambient[2].1, OsString::from("x"));
    }
}
