use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

use crate::services::radiotray::ApiError;

/// Error types for the bridge.
///
/// Every variant is fatal: it is logged once at the top level and turned into
/// a distinct process exit code by [`BridgeError::exit_code`].
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Radiotray-NG API failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// MPRIS registration or signal emission failure
    #[error("MPRIS server error: {0}")]
    Bus(#[from] zbus::Error),

    /// The player executable could not be started
    #[error("failed to start '{executable}': {source}")]
    Spawn {
        /// Executable that failed to start
        executable: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration field missing or invalid
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// Configuration file could not be read
    #[error("I/O error on '{path}': {details}")]
    ConfigIo {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Logging could not be initialized
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// A specialized `Result` type for bridge operations.
pub type Result<T> = result::Result<T, BridgeError>;

impl BridgeError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        BridgeError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Process exit status reported for this error.
    ///
    /// Codes 1 and 2 are left to generic failures and clap's usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidConfigField { .. } | Self::ConfigIo { .. } | Self::TomlParseError { .. } => {
                9
            }
            Self::Api(ApiError::ServiceUnavailable { .. }) => 3,
            Self::Api(ApiError::Protocol { .. }) => 4,
            Self::Api(_) => 5,
            Self::Bus(_) => 6,
            Self::Spawn { .. } | Self::Io(_) => 7,
            Self::Logging(_) => 8,
        }
    }
}
