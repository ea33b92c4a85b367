//! Tests for merging CLI and TOML configuration.

use super::toml::TomlConfig;
use super::*;

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from_iter(std::iter::once("bandfi").chain(args.iter().copied()))
}

mod merge {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = Config::from_raw(&cli(&[]), None).unwrap();
        assert_eq!(config.source, DataSource::Live);
        assert!(config.fallback_to_sample);
        assert!(!config.show_sort);
        assert!(!config.verbose);
    }

    #[test]
    fn file_source_is_used() {
        let toml = TomlConfig::parse("[scan]\nsource = \"sample\"").unwrap();
        let config = Config::from_raw(&cli(&[]), Some(&toml)).unwrap();
        assert_eq!(config.source, DataSource::Sample);
    }

    #[test]
    fn cli_source_wins_over_file() {
        let toml = TomlConfig::parse("[scan]\nsource = \"sample\"").unwrap();
        let config = Config::from_raw(&cli(&["--source", "live"]), Some(&toml)).unwrap();
        assert_eq!(config.source, DataSource::Live);
    }

    #[test]
    fn invalid_file_source() {
        let toml = TomlConfig::parse("[scan]\nsource = \"radio\"").unwrap();
        let err = Config::from_raw(&cli(&[]), Some(&toml)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSource { ref value } if value == "radio"));
    }

    #[test]
    fn no_fallback_overrides_file() {
        let toml = TomlConfig::parse("[scan]\nfallback_to_sample = true").unwrap();
        let config = Config::from_raw(&cli(&["--no-fallback"]), Some(&toml)).unwrap();
        assert!(!config.fallback_to_sample);

        let toml = TomlConfig::parse("[scan]\nfallback_to_sample = false").unwrap();
        let config = Config::from_raw(&cli(&[]), Some(&toml)).unwrap();
        assert!(!config.fallback_to_sample);
    }

    #[test]
    fn flags_are_or_ed() {
        let toml = TomlConfig::parse("[display]\nshow_sort = true\n[log]\nverbose = true").unwrap();
        let config = Config::from_raw(&cli(&[]), Some(&toml)).unwrap();
        assert!(config.show_sort);
        assert!(config.verbose);

        let config = Config::from_raw(&cli(&["--show-sort"]), None).unwrap();
        assert!(config.show_sort);
    }
}

mod config_load {
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    use super::*;

    #[test]
    fn load_from_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\nsource = \"sample\"").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = Config::load_with_default(&cli(&["--config", &path]), None).unwrap();
        assert_eq!(config.source, DataSource::Sample);
        assert_eq!(config.config_file.as_deref(), Some(file.path()));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load_with_default(&cli(&["--config", path.to_str().unwrap()]), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn missing_default_file_is_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_with_default(&cli(&[]), Some(&path)).unwrap();
        assert_eq!(config.source, DataSource::Live);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn default_file_is_used_when_present() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nshow_sort = true\n").unwrap();

        let config = Config::load_with_default(&cli(&[]), Some(&path)).unwrap();
        assert!(config.show_sort);
        assert_eq!(config.config_file.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scan").unwrap();
        let err = Config::load_with_default(&cli(&[]), Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}

mod write_config {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn write_default_config_creates_loadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bandfi.toml");

        write_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[scan]"));
        assert!(content.contains("[display]"));
        assert!(TomlConfig::load(&path).is_ok());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("bandfi.toml");
        assert!(matches!(
            write_default_config(&path),
            Err(ConfigError::FileWrite { .. })
        ));
    }
}
