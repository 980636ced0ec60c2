//! MPRIS2 bridge for Radiotray-NG.
//!
//! Radiotray-NG exposes a small private D-Bus API. This crate starts the
//! player, talks to that API and republishes the player as a standard
//! `org.mpris.MediaPlayer2` endpoint so desktop media keys, applets and
//! `playerctl` can drive it. The pieces are:
//!
//! - [`services::radiotray`]: typed client for the player API, with bounded
//!   connection retry
//! - [`services::mpris`]: translation of MPRIS requests onto that client and
//!   the D-Bus object server
//! - [`notifier`]: poll loop that diffs player state and emits
//!   `PropertiesChanged` only for fields that changed
//! - [`supervisor`]: player process lifecycle and signal-driven shutdown

/// Top-level run loop.
pub mod bridge;

/// Command-line arguments.
pub mod cli;

/// Configuration schema, loading and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// State polling and change notification.
pub mod notifier;

/// D-Bus services: the player API client and the MPRIS endpoint.
pub mod services;

/// Player process supervision.
pub mod supervisor;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{BridgeError, Result};
