//! pythonloc core: PEP 582 `__pypackages__` resolution for the `pythonloc`,
//! `piploc` and `pipfreezeloc` shims.

pub mod config;
pub mod environment;
pub mod error;
pub mod freeze;
pub mod installer;
pub mod interpreter;
pub mod local_packages;
pub mod script;

pub use error::{Error, Result};
pub use local_packages::{local_lib_dir, PythonVersion, PYPACKAGES_DIR};
