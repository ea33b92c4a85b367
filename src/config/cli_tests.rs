//! Tests for CLI argument parsing.

use clap::Parser;

use super::cli::{Cli, Command, DataSourceArg};

#[test]
fn no_args_leaves_everything_unset() {
    let cli = Cli::parse_from_iter(["bandfi"]);
    assert!(cli.command.is_none());
    assert!(cli.source.is_none());
    assert!(!cli.no_fallback);
    assert!(!cli.show_sort);
    assert!(!cli.verbose);
}

#[test]
fn parse_sources() {
    let live = Cli::parse_from_iter(["bandfi", "--source", "live"]);
    assert_eq!(live.source, Some(DataSourceArg::Live));

    let sample = Cli::parse_from_iter(["bandfi", "--source", "sample"]);
    assert_eq!(sample.source, Some(DataSourceArg::Sample));
}

#[test]
fn parse_flags() {
    let cli = Cli::parse_from_iter([
        "bandfi",
        "--no-fallback",
        "--show-sort",
        "-v",
        "-c",
        "/tmp/bandfi.toml",
    ]);
    assert!(cli.no_fallback);
    assert!(cli.show_sort);
    assert!(cli.verbose);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/bandfi.toml"))
    );
}

#[test]
fn init_default_output() {
    let cli = Cli::parse_from_iter(["bandfi", "init"]);
    match cli.command {
        Some(Command::Init { output }) => assert_eq!(output.to_str(), Some("bandfi.toml")),
        None => panic!("expected init command"),
    }
}

#[test]
fn invalid_source_is_rejected() {
    assert!(Cli::try_parse_from(["bandfi", "--source", "radio"]).is_err());
}
