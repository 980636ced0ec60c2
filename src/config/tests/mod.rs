//! Unit tests for the config module.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::{fs, time::Duration};

use tempfile::TempDir;

use crate::{
    BridgeError,
    config::{Config, ConfigPaths, LogLevel},
};

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Warn);
    assert_eq!(config.player.executable, "radiotray-ng");
    assert!(config.player.args.is_empty());
    assert_eq!(config.player.autoplay_flag, "--play");
    assert_eq!(config.bridge.poll_interval(), Duration::from_secs(1));
    assert_eq!(config.bridge.bus_name, "radiotray_ng");
    assert_eq!(config.bridge.identity, "Radiotray-NG");
    assert_eq!(config.bridge.desktop_entry, "radiotray-ng");

    let policy = config.bridge.retry_policy();
    assert_eq!(policy.max_attempts, 30);
    assert_eq!(policy.delay, Duration::from_secs(1));
}

#[test]
fn empty_toml_gives_defaults() {
    let config = Config::from_toml("", None).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [bridge]
        poll_interval_ms = 250
    "#;

    let config = Config::from_toml(toml_str, None).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.bridge.poll_interval_ms, 250);
    assert_eq!(config.bridge.connect_attempts, 30);
    assert_eq!(config.player.executable, "radiotray-ng");
}

#[test]
fn serialize_roundtrip() {
    let mut original = Config::default();
    original.player.args = vec!["--config".to_string(), "/tmp/rt.json".to_string()];
    original.general.log_level = LogLevel::Info;

    let toml_str = toml::to_string(&original).unwrap();
    assert!(toml_str.contains("[player]"));

    let deserialized = Config::from_toml(&toml_str, None).unwrap();
    assert_eq!(deserialized, original);
}

#[test]
fn unknown_log_level_is_a_parse_error() {
    let result = Config::from_toml("[general]\nlog_level = \"loud\"\n", None);

    assert!(matches!(result, Err(BridgeError::TomlParseError { .. })));
}

#[test]
fn zero_poll_interval_is_rejected() {
    let mut config = Config::default();
    config.bridge.poll_interval_ms = 0;

    match config.validate() {
        Err(BridgeError::InvalidConfigField { field, .. }) => {
            assert_eq!(field, "bridge.poll_interval_ms");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn zero_connect_attempts_is_rejected() {
    let mut config = Config::default();
    config.bridge.connect_attempts = 0;

    assert!(matches!(
        config.validate(),
        Err(BridgeError::InvalidConfigField { .. })
    ));
}

#[test]
fn bus_name_with_spaces_is_rejected() {
    let mut config = Config::default();
    config.bridge.bus_name = "radio tray".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn load_reads_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[player]\nexecutable = \"/opt/rt/radiotray-ng\"\nargs = [\"--verbose\"]\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.player.executable, "/opt/rt/radiotray-ng");
    assert_eq!(config.player.args, vec!["--verbose"]);
}

#[test]
fn load_missing_explicit_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        Config::load(Some(&path)),
        Err(BridgeError::ConfigIo { .. })
    ));
}

#[test]
fn load_validates_file_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[bridge]\nconnect_attempts = 0\n").unwrap();

    assert!(matches!(
        Config::load(Some(&path)),
        Err(BridgeError::InvalidConfigField { .. })
    ));
}

#[test]
fn malformed_file_reports_location() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[bridge\n").unwrap();

    match Config::load(Some(&path)) {
        Err(BridgeError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn main_config_lives_in_app_dir() {
    if let Ok(path) = ConfigPaths::main_config() {
        assert!(path.ends_with("radiotray-ng-mpris/config.toml"));
    }
}

#[test]
fn json_schema_names_sections() {
    let schema = Config::json_schema().unwrap();

    assert!(schema.contains("poll_interval_ms"));
    assert!(schema.contains("autoplay_flag"));
}
