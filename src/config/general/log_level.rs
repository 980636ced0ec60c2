use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logging level for the bridge.
///
/// Used as the default filter when neither `RUST_LOG` nor a verbosity flag
/// is given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Fatal errors only.
    Error,

    /// Warnings and errors (default level).
    #[default]
    Warn,

    /// Lifecycle messages: player started, bus name acquired, shutdown.
    Info,

    /// Every player API call and every detected state change.
    Debug,

    /// Everything, including zbus internals when allowed by the filter.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
