//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

#[test]
fn parse_empty_config() {
    let config = TomlConfig::parse("").unwrap();
    assert!(config.scan.source.is_none());
    assert!(config.scan.fallback_to_sample.is_none());
    assert!(!config.display.show_sort);
    assert!(!config.log.verbose);
}

#[test]
fn parse_full_config() {
    let toml = r#"
        [scan]
        source = "sample"
        fallback_to_sample = false

        [display]
        show_sort = true

        [log]
        verbose = true
    "#;

    let config = TomlConfig::parse(toml).unwrap();
    assert_eq!(config.scan.source.as_deref(), Some("sample"));
    assert_eq!(config.scan.fallback_to_sample, Some(false));
    assert!(config.display.show_sort);
    assert!(config.log.verbose);
}

#[test]
fn unknown_fields_are_rejected() {
    let toml = r"
        [scan]
        interval = 5
    ";
    assert!(TomlConfig::parse(toml).is_err());
}

#[test]
fn template_parses() {
    let config = TomlConfig::parse(&default_config_template()).unwrap();
    assert_eq!(config.scan.source.as_deref(), Some("live"));
}
