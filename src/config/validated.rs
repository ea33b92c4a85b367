//! Configuration after merging CLI and TOML sources.

use std::fmt;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::error::ConfigError;
use super::toml::TomlConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Live,
    Sample,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Sample => write!(f, "sample"),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub source: DataSource,

    /// Load sample data when a live scan fails
    pub fallback_to_sample: bool,

    /// Expose the sorted 5 GHz view
    pub show_sort: bool,

    pub verbose: bool,

    /// File the settings were read from, if any
    pub config_file: Option<PathBuf>,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self
            .config_file
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ source: {}, fallback_to_sample: {}, show_sort: {}, file: {} }}",
            self.source, self.fallback_to_sample, self.show_sort, file,
        )
    }
}

impl Config {
    /// Merges CLI arguments over an optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if the data source in the file is not recognised.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let source = Self::resolve_source(cli, toml)?;

        let fallback_to_sample = !cli.no_fallback
            && toml
                .and_then(|t| t.scan.fallback_to_sample)
                .unwrap_or(true);

        Ok(Self {
            source,
            fallback_to_sample,
            show_sort: cli.show_sort || toml.is_some_and(|t| t.display.show_sort),
            verbose: cli.verbose || toml.is_some_and(|t| t.log.verbose),
            config_file: None,
        })
    }

    /// Loads the file named by `--config`, else the default path if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_default(cli, default_config_path().as_deref())
    }

    /// Like [`Config::load`] with an explicit fallback path. A missing
    /// default file is not an error; a missing `--config` file is.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read, parsed or validated.
    pub fn load_with_default(cli: &Cli, default: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match (&cli.config, default) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(path)) if path.is_file() => Some(path.to_path_buf()),
            _ => None,
        };

        let toml = path.as_deref().map(TomlConfig::load).transpose()?;
        let mut config = Self::from_raw(cli, toml.as_ref())?;
        config.config_file = path;
        Ok(config)
    }

    fn resolve_source(cli: &Cli, toml: Option<&TomlConfig>) -> Result<DataSource, ConfigError> {
        if let Some(source) = cli.source {
            return Ok(source.into());
        }

        match toml.and_then(|t| t.scan.source.as_deref()) {
            Some(value) => parse_source(value),
            None => Ok(DataSource::default()),
        }
    }
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bandfi").join("config.toml"))
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_source(s: &str) -> Result<DataSource, ConfigError> {
    match s.to_lowercase().as_str() {
        "live" | "nm" | "networkmanager" => Ok(DataSource::Live),
        "sample" | "fixture" => Ok(DataSource::Sample),
        _ => Err(ConfigError::InvalidSource {
            value: s.to_string(),
        }),
    }
}
