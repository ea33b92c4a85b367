//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file. Every field is optional so
/// a partial file merges cleanly with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub scan: ScanSection,

    #[serde(default)]
    pub display: DisplaySection,

    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSection {
    /// "live" or "sample"
    pub source: Option<String>,

    /// Load sample data when a live scan fails
    pub fallback_to_sample: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplaySection {
    #[serde(default)]
    pub show_sort: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    #[serde(default)]
    pub verbose: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# bandfi configuration file

[scan]
# Where the network list comes from: "live" (NetworkManager) or "sample"
source = "live"

# Load the bundled sample networks when a live scan fails (default: true)
# Disable with the --no-fallback CLI flag
# fallback_to_sample = true

[display]
# Show the "sort 5 GHz networks by frequency" button
# show_sort = false

[log]
# Debug-level logging (RUST_LOG overrides)
# verbose = false
"#
    .to_string()
}
