use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Locates configuration files following the XDG Base Directory
/// specification.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Directory name under the XDG config home.
    pub const APP_DIR: &'static str = "radiotray-ng-mpris";

    /// Returns the configuration directory path for the bridge.
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "radiotray-ng-mpris" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .or_else(|| env::var("HOME").ok().map(|home| format!("{home}/.config")))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(Self::APP_DIR))
    }

    /// Returns the path to the main configuration file.
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
