use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{BridgeError, Result};

/// Environment variable selecting the log format (`json` or human-readable).
pub const LOG_FORMAT_VAR: &str = "RADIOTRAY_MPRIS_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset.
///
/// zbus internals are capped at `warn` so D-Bus chatter does not drown the
/// bridge's own debug output.
pub fn default_filter(level: &str) -> String {
    if level == "off" {
        return level.to_string();
    }
    format!("{level},zbus=warn")
}

/// Initialize tracing for the bridge.
///
/// `RUST_LOG` wins over `level` when set. Output goes to stderr, as JSON
/// lines when `RADIOTRAY_MPRIS_LOG_FORMAT=json`, otherwise in a compact
/// human format.
///
/// # Errors
/// Returns `BridgeError::Logging` if the filter is invalid or a global
/// subscriber is already installed.
pub fn init(level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter(level))
            .map_err(|e| BridgeError::Logging(e.to_string()))?,
    };

    let format = env::var(LOG_FORMAT_VAR).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format.as_str() {
        "json" => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        _ => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| BridgeError::Logging(e.to_string()))
}
