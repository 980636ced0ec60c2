//! Command-line interface of the bridge binary.

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// MPRIS2 bridge for Radiotray-NG.
///
/// Starts radiotray-ng and exposes it on the session bus as an MPRIS2 media
/// player so desktop media keys and applets can control it.
#[derive(Parser, Debug, Default)]
#[command(name = "radiotray-ng-mpris", version)]
#[command(group(
    ArgGroup::new("verbosity").args(["quiet", "error", "warn", "verbose", "debug"])
))]
pub struct Cli {
    /// Start playback immediately
    #[arg(short, long)]
    pub play: bool,

    /// Be quiet
    #[arg(short, long)]
    pub quiet: bool,

    /// Print error messages
    #[arg(long)]
    pub error: bool,

    /// Print warning and error messages
    #[arg(long)]
    pub warn: bool,

    /// Be verbose
    #[arg(short, long)]
    pub verbose: bool,

    /// Print debug messages
    #[arg(long)]
    pub debug: bool,

    /// Configuration file (default: $XDG_CONFIG_HOME/radiotray-ng-mpris/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Milliseconds between two player state polls
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub poll_interval: Option<u64>,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long)]
    pub print_config_schema: bool,
}

/// Verbosity chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// No output at all
    Quiet,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Verbose,
    /// Debug messages
    Debug,
}

impl Verbosity {
    /// `tracing` filter directive for this verbosity.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

impl Cli {
    /// Verbosity flag given, if any.
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else if self.error {
            Some(Verbosity::Error)
        } else if self.warn {
            Some(Verbosity::Warn)
        } else if self.verbose {
            Some(Verbosity::Verbose)
        } else if self.debug {
            Some(Verbosity::Debug)
        } else {
            None
        }
    }
}
