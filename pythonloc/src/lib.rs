//! pythonloc CLI library, shared by the pythonloc, piploc and pipfreezeloc binaries.

mod cli;
mod commands;
mod launch;
mod observability;

use anyhow::Result;
use clap::Parser;

/// `pythonloc`: run Python with `__pypackages__` on the module search path.
pub fn run_pythonloc() -> Result<()> {
    observability::init_tracing();
    commands::run::cmd_run(&cli::passthrough_args())
}

/// `piploc`: run pip, installing into `__pypackages__`.
pub fn run_piploc() -> Result<()> {
    observability::init_tracing();
    commands::pip::cmd_pip(&cli::passthrough_args())
}

/// `pipfreezeloc`: list locally installed requirements.
pub fn run_pipfreezeloc() -> Result<()> {
    let _cli = cli::FreezeCli::parse();
    observability::init_tracing();
    commands::freeze::cmd_freeze()
}
