//! pythonloc configuration layer
//!
//! Every read of the tool's own settings goes through here, so launcher code
//! never calls `std::env::var` directly. The child process environment is a
//! separate concern handled by [`crate::environment`].
//!
//! - `loader`: env_or, env_optional, env_bool helpers with alias chains
//! - `schema`: InterpreterConfig, ObservabilityConfig
//! - `env_keys`: key constants and aliases

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or};
pub use schema::{InterpreterConfig, ObservabilityConfig};
