//! Exit codes, tracing setup and configuration hints for the entry point.

use crate::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    use std::process::ExitCode;

    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Invalid arguments or configuration file (exit code 1).
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The GTK application failed to run (exit code 2).
    ///
    /// A function because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => {
            eprintln!("\nRun 'bandfi init' to generate a configuration template.");
        }
        ConfigError::InvalidSource { .. } => {
            eprintln!("\nSet scan.source to \"live\" or \"sample\".");
        }
        ConfigError::FileWrite { .. } => {}
    }
}

pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
