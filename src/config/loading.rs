use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{BridgeError, Result};

impl Config {
    /// Load the configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the built-in defaults. The result is validated.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid TOML for this
    /// schema, or fails validation.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config = match path {
            Some(path) => Self::load_file(path)?,
            None => match ConfigPaths::main_config() {
                Ok(default_path) => Self::load_optional(&default_path)?,
                Err(e) => {
                    debug!("No config directory ({e}), using defaults");
                    Config::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `BridgeError::TomlParseError` if the string does not match
    /// the schema.
    pub fn from_toml(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| BridgeError::toml_parse(e, path))
    }

    fn load_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| BridgeError::ConfigIo {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        debug!("Loaded configuration from {}", path.display());

        Self::from_toml(&content, Some(path))
    }

    fn load_optional(path: &Path) -> Result<Config> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("Loaded configuration from {}", path.display());
                Self::from_toml(&content, Some(path))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not found, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => Err(BridgeError::ConfigIo {
                path: path.to_path_buf(),
                details: e.to_string(),
            }),
        }
    }
}
