use std::io::{self, Write};

use anyhow::Result;
use pythonloc_core::{environment, freeze, local_lib_dir};

/// `pipfreezeloc`: print requirements visible with `__pypackages__` on the
/// path that are not visible without it.
pub fn cmd_freeze() -> Result<()> {
    let (python, version) = super::resolve_interpreter()?;
    let lib_dir = local_lib_dir(None, &version);
    let env = environment::build_env_from_process(&lib_dir);

    let local = freeze::capture_freeze(&python, Some(&env))?;
    let global = freeze::capture_freeze(&python, None)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for requirement in freeze::diff_requirements(&local, &global) {
        writeln!(out, "{}", requirement)?;
    }
    out.flush()?;
    Ok(())
}
