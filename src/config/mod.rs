//! Configuration layer.
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. Explicit CLI arguments
//! 2. TOML config file (`--config`, or `bandfi/config.toml` under the user
//!    config directory when it exists)
//! 3. Built-in defaults
//!
//! Boolean flags only enable: `--show-sort` and `--verbose` are OR-ed with the
//! file. `--no-fallback` is the one flag that disables something.

mod cli;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use validated::{Config, DataSource, write_default_config};
