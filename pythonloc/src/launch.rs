//! Hand the process over to the interpreter.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use pythonloc_core::Error;

/// Command for `program args...` running under exactly `env`.
pub fn command_with_env(
    program: &Path,
    args: &[OsString],
    env: &BTreeMap<OsString, OsString>,
) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args).env_clear().envs(env);
    cmd
}

/// Replace the current process image with `cmd`. Returns only on launch failure.
#[cfg(unix)]
pub fn replace_process(cmd: &mut Command, program: &Path) -> Error {
    use std::os::unix::process::CommandExt;

    tracing::debug!("exec {:?}", cmd);
    let source = cmd.exec();
    Error::Launch {
        program: program.to_path_buf(),
        source,
    }
}

/// Let Ctrl-C reach only the child: the parent keeps waiting so it can
/// report the child's exit code. Can be installed once per process.
#[cfg_attr(unix, allow(dead_code))]
pub fn ignore_interrupts() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {})
}

/// No `exec` here: run to completion and exit with the child's code.
#[cfg(not(unix))]
pub fn replace_process(cmd: &mut Command, program: &Path) -> Error {
    if let Err(e) = ignore_interrupts() {
        tracing::warn!("could not install Ctrl-C handler: {}", e);
    }
    tracing::debug!("spawn {:?}", cmd);
    match cmd.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => Error::Launch {
            program: program.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_with_env_uses_only_given_env() {
        let mut env = BTreeMap::new();
        env.insert(OsString::from("PYTHONPATH"), OsString::from(".:lib:"));
        let args = vec![OsString::from("-O"), OsString::from("run.py")];
        let cmd = command_with_env(Path::new("python3"), &args, &env);

        assert_eq!(cmd.get_program(), "python3");
        let got: Vec<_> = cmd.get_args().collect();
        assert_eq!(got, vec!["-O", "run.py"]);
        let envs: Vec<_> = cmd.get_envs().collect();
        assert_eq!(envs.len(), 1);
        assert_eq!(envs[0].0, "PYTHONPATH");
    }

    #[test]
    fn test_ignore_interrupts_installs_handler() {
        assert!(ignore_interrupts().is_ok());
        // a second handler is refused, so the first one is in place
        assert!(matches!(
            ignore_interrupts(),
            Err(ctrlc::Error::MultipleHandlers)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_replace_process_missing_program() {
        let program = Path::new("/nonexistent/pythonloc/python");
        let mut cmd = Command::new(program);
        match replace_process(&mut cmd, program) {
            Error::Launch { program: p, source } => {
                assert_eq!(p, program);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Launch error, got {:?}", other),
        }
    }
}
