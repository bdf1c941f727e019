use std::ffi::OsString;

use clap::Parser;

/// Arguments for `pythonloc` / `piploc`: everything after the program name,
/// untouched. These are never parsed so `--`, `--help` and non-UTF-8 tokens
/// reach Python or pip exactly as typed.
pub fn passthrough_args() -> Vec<OsString> {
    std::env::args_os().skip(1).collect()
}

/// pipfreezeloc - list packages installed in __pypackages__ but not globally
#[derive(Parser, Debug)]
#[command(name = "pipfreezeloc")]
#[command(author, version, about, long_about = None)]
pub struct FreezeCli {}
