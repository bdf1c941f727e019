use std::ffi::OsString;

use anyhow::Result;
use pythonloc_core::{environment, installer, interpreter, local_lib_dir};

use crate::launch;

/// `piploc ARGS...`: exec `python -m pip ARGS...`, adding `--target` (and
/// `--system` on legacy pip) for installs.
pub fn cmd_pip(args: &[OsString]) -> Result<()> {
    let (python, version) = super::resolve_interpreter()?;
    let lib_dir = local_lib_dir(None, &version);

    let pip_version = if installer::is_install(args) {
        interpreter::probe_pip_version(&python)
    } else {
        None
    };
    let extra = installer::installer_flags(args, &lib_dir, pip_version.as_deref());
    if !extra.is_empty() {
        tracing::info!("adding pip flags {:?}", extra);
    }

    let mut pip_args: Vec<OsString> = vec!["-m".into(), "pip".into()];
    pip_args.extend(args.iter().cloned());
    pip_args.extend(extra);

    let env = environment::build_env_from_process(&lib_dir);
    let mut cmd = launch::command_with_env(&python, &pip_args, &env);
    Err(launch::replace_process(&mut cmd, &python).into())
}
