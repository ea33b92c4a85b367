//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// bandfi: nearby Wi-Fi networks by band
///
/// Scans through NetworkManager, shows the current connection and filters
/// the list by 2.4 GHz, 5 GHz and dual-band SSIDs.
#[derive(Debug, Parser)]
#[command(name = "bandfi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Where the network list comes from
    #[arg(long, value_enum)]
    pub source: Option<DataSourceArg>,

    /// Do not fall back to sample data when live scanning fails
    #[arg(long = "no-fallback")]
    pub no_fallback: bool,

    /// Show the "sort 5 GHz by frequency" button
    #[arg(long = "show-sort")]
    pub show_sort: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "bandfi.toml")]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DataSourceArg {
    /// Scan through NetworkManager
    Live,
    /// Use the bundled sample networks
    Sample,
}

impl From<DataSourceArg> for super::DataSource {
    fn from(arg: DataSourceArg) -> Self {
        match arg {
            DataSourceArg::Live => Self::Live,
            DataSourceArg::Sample => Self::Sample,
        }
    }
}

impl Cli {
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
