#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Verbosity};

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn no_flags_means_no_overrides() {
    let cli = Cli::try_parse_from(["radiotray-ng-mpris"]).unwrap();

    assert!(!cli.play);
    assert_eq!(cli.verbosity(), None);
    assert_eq!(cli.config, None);
    assert_eq!(cli.poll_interval, None);
}

#[test]
fn parses_play_and_config() {
    let cli =
        Cli::try_parse_from(["radiotray-ng-mpris", "-p", "-c", "/tmp/rt.toml", "--poll-interval", "250"])
            .unwrap();

    assert!(cli.play);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/rt.toml")));
    assert_eq!(cli.poll_interval, Some(250));
}

#[test]
fn each_verbosity_flag_maps_to_a_directive() {
    let cases = [
        ("-q", Verbosity::Quiet, "off"),
        ("--error", Verbosity::Error, "error"),
        ("--warn", Verbosity::Warn, "warn"),
        ("-v", Verbosity::Verbose, "info"),
        ("--debug", Verbosity::Debug, "debug"),
    ];

    for (flag, verbosity, directive) in cases {
        let cli = Cli::try_parse_from(["radiotray-ng-mpris", flag]).unwrap();
        assert_eq!(cli.verbosity(), Some(verbosity), "{flag}");
        assert_eq!(verbosity.directive(), directive);
    }
}

#[test]
fn verbosity_flags_are_mutually_exclusive() {
    assert!(Cli::try_parse_from(["radiotray-ng-mpris", "-q", "--debug"]).is_err());
    assert!(Cli::try_parse_from(["radiotray-ng-mpris", "-v", "--error"]).is_err());
}

#[test]
fn zero_poll_interval_is_rejected() {
    assert!(Cli::try_parse_from(["radiotray-ng-mpris", "--poll-interval", "0"]).is_err());
}

#[test]
fn version_flag_is_handled_by_clap() {
    let error = Cli::try_parse_from(["radiotray-ng-mpris", "-V"]).unwrap_err();

    assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn usage_errors_do_not_share_an_exit_code_with_bridge_errors() {
    let usage = Cli::try_parse_from(["radiotray-ng-mpris", "--bogus"]).unwrap_err();
    let config = crate::BridgeError::InvalidConfigField {
        field: "bridge.poll_interval_ms".to_string(),
        reason: "must be greater than zero".to_string(),
    };

    assert_eq!(usage.exit_code(), 2);
    assert_ne!(i32::from(config.exit_code()), usage.exit_code());
}
