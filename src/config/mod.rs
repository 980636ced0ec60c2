//! Configuration schema definitions and validation.
//!
//! The bridge reads an optional TOML file with three sections: `[general]`
//! for logging, `[player]` for how Radiotray-NG is launched and `[bridge]`
//! for polling, connection retry and the MPRIS identity. Every field has a
//! default, so an empty or missing file is a valid configuration.

mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{BridgeError, Result, services::radiotray::RetryPolicy};

/// Main configuration structure for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// How the player process is launched.
    #[serde(default)]
    pub player: PlayerSettings,

    /// Polling, connection and MPRIS identity settings.
    #[serde(default)]
    pub bridge: BridgeSettings,
}

/// Player launch settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PlayerSettings {
    /// Executable started as the player, looked up in `PATH`.
    pub executable: String,

    /// Extra arguments passed on every start.
    pub args: Vec<String>,

    /// Argument appended when playback should start immediately.
    pub autoplay_flag: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            executable: "radiotray-ng".to_string(),
            args: Vec::new(),
            autoplay_flag: "--play".to_string(),
        }
    }
}

/// Settings for the bridge between the player and MPRIS.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct BridgeSettings {
    /// Milliseconds between two player state polls.
    pub poll_interval_ms: u64,

    /// Total connection attempts while the player registers on the bus.
    pub connect_attempts: u32,

    /// Milliseconds between two connection attempts.
    pub connect_retry_delay_ms: u64,

    /// Suffix of the owned bus name `org.mpris.MediaPlayer2.<bus_name>`.
    pub bus_name: String,

    /// Value of the MPRIS `Identity` property.
    pub identity: String,

    /// Value of the MPRIS `DesktopEntry` property.
    pub desktop_entry: String,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            connect_attempts: 30,
            connect_retry_delay_ms: 1000,
            bus_name: "radiotray_ng".to_string(),
            identity: "Radiotray-NG".to_string(),
            desktop_entry: "radiotray-ng".to_string(),
        }
    }
}

impl BridgeSettings {
    /// Poll period as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Connection retry bound built from these settings.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.connect_attempts,
            delay: Duration::from_millis(self.connect_retry_delay_ms),
        }
    }
}

impl Config {
    /// Check values the type system cannot rule out.
    ///
    /// # Errors
    /// Returns `BridgeError::InvalidConfigField` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field: &str, reason: &str| BridgeError::InvalidConfigField {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.bridge.poll_interval_ms == 0 {
            return Err(invalid("bridge.poll_interval_ms", "must be greater than zero"));
        }
        if self.bridge.connect_attempts == 0 {
            return Err(invalid("bridge.connect_attempts", "must be greater than zero"));
        }
        if self.player.executable.trim().is_empty() {
            return Err(invalid("player.executable", "must not be empty"));
        }
        if self.bridge.bus_name.is_empty()
            || !self
                .bridge
                .bus_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err(invalid(
                "bridge.bus_name",
                "must be a non-empty name of letters, digits, '_' and '.'",
            ));
        }

        Ok(())
    }

    /// JSON schema of the configuration file, pretty-printed.
    ///
    /// # Errors
    /// Returns error if the schema cannot be serialized.
    pub fn json_schema() -> std::result::Result<String, serde_json::Error> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema)
    }
}
