use std::ffi::OsString;

use anyhow::Result;
use pythonloc_core::{environment, local_lib_dir, script};

use crate::launch;

/// `pythonloc ARGS...`: exec Python with local packages on `PYTHONPATH`,
/// resolved next to the script when one is given.
pub fn cmd_run(args: &[OsString]) -> Result<()> {
    let (python, version) = super::resolve_interpreter()?;
    let script = script::detect_script(args);
    let lib_dir = local_lib_dir(script.as_deref(), &version);
    tracing::debug!(script = ?script, lib_dir = %lib_dir.display(), "resolved local packages");

    let env = environment::build_env_from_process(&lib_dir);
    let mut cmd = launch::command_with_env(&python, args, &env);
    Err(launch::replace_process(&mut cmd, &python).into())
}
