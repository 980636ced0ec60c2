use std::sync::Arc;

use tracing::debug;

use super::types::{
    Capabilities, LoopStatus, Metadata, PlaybackStatus, volume_from_fraction, volume_to_fraction,
};
use crate::services::radiotray::{ApiError, PlayerApi};

/// Features supported by Radiotray-NG. Fixed for the lifetime of the bridge.
pub const CAPABILITIES: Capabilities = Capabilities::QUIT
    .union(Capabilities::GO_NEXT)
    .union(Capabilities::GO_PREVIOUS)
    .union(Capabilities::PLAY)
    .union(Capabilities::PAUSE)
    .union(Capabilities::CONTROL);

/// Human-readable player name shown by MPRIS clients
pub const DEFAULT_IDENTITY: &str = "Radiotray-NG";
/// Desktop file basename of the player
pub const DEFAULT_DESKTOP_ENTRY: &str = "radiotray-ng";
/// Playback rate; Radiotray-NG has no rate control
pub const DEFAULT_RATE: f64 = 1.0;

/// URI schemes accepted by `OpenUri`
pub const URI_SCHEMES: &[&str] = &["file", "http", "https"];

/// MIME types accepted by `OpenUri`
pub const MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/aac",
    "audio/ogg",
    "audio/flac",
    "audio/x-mpegurl",
    "audio/x-scpls",
    "application/ogg",
    "application/vnd.apple.mpegurl",
];

/// Ordering supported by the playlist stub
pub const PLAYLIST_ORDERINGS: &[&str] = &["Alphabetical"];

/// Translates MPRIS requests into Radiotray-NG calls.
///
/// Holds no state of its own: every query goes to the player, nothing is
/// cached between calls.
#[derive(Clone)]
pub struct ProtocolAdapter {
    api: Arc<dyn PlayerApi>,
    identity: String,
    desktop_entry: String,
}

impl ProtocolAdapter {
    /// Wrap a player API connection.
    pub fn new(api: Arc<dyn PlayerApi>) -> Self {
        Self {
            api,
            identity: DEFAULT_IDENTITY.to_string(),
            desktop_entry: DEFAULT_DESKTOP_ENTRY.to_string(),
        }
    }

    /// Override the name and desktop entry reported to clients.
    pub fn with_identity(
        mut self,
        identity: impl Into<String>,
        desktop_entry: impl Into<String>,
    ) -> Self {
        self.identity = identity.into();
        self.desktop_entry = desktop_entry.into();
        self
    }

    /// Underlying player API.
    pub fn api(&self) -> &Arc<dyn PlayerApi> {
        &self.api
    }

    /// Whether a capability is supported.
    pub fn can(&self, capability: Capabilities) -> bool {
        CAPABILITIES.contains(capability)
    }

    /// Player name.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Desktop entry basename.
    pub fn desktop_entry(&self) -> &str {
        &self.desktop_entry
    }

    /// Metadata of the current stream, built from a fresh player state.
    ///
    /// # Errors
    /// Returns error if the player state cannot be fetched.
    pub async fn metadata(&self) -> Result<Metadata, ApiError> {
        let state = self.api.player_state().await?;
        Ok(Metadata {
            art_url: state.text("image"),
            url: state.text("url"),
            title: state.text("title"),
            artists: vec![state.text("artist")],
            comments: vec![format!("Radio Station: {}", state.text("station"))],
        })
    }

    /// Current playback status.
    ///
    /// # Errors
    /// Returns error if the player state cannot be fetched.
    pub async fn playback_status(&self) -> Result<PlaybackStatus, ApiError> {
        let state = self.api.player_state().await?;
        Ok(PlaybackStatus::from_player_state(&state.state()))
    }

    /// Current volume as a fraction in `0.0..=1.0`.
    ///
    /// # Errors
    /// Returns error if the player state cannot be fetched.
    pub async fn volume(&self) -> Result<f64, ApiError> {
        let state = self.api.player_state().await?;
        Ok(volume_to_fraction(state.volume().unwrap_or_default()))
    }

    /// Set the volume from a fraction.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn set_volume(&self, fraction: f64) -> Result<(), ApiError> {
        self.api.set_volume(volume_from_fraction(fraction)).await
    }

    /// Whether output is muted.
    ///
    /// # Errors
    /// Returns error if the player state cannot be fetched.
    pub async fn is_muted(&self) -> Result<bool, ApiError> {
        Ok(self.api.player_state().await?.mute())
    }

    /// Set the mute flag. The player only knows how to toggle, so the command
    /// is sent only when the requested value differs from the current one.
    ///
    /// # Errors
    /// Returns error if the state cannot be fetched or the toggle fails.
    pub async fn set_mute(&self, muted: bool) -> Result<(), ApiError> {
        if self.is_muted().await? == muted {
            debug!(muted, "Mute already in requested state");
            return Ok(());
        }
        self.api.mute().await
    }

    /// Skip to the next station.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn next(&self) -> Result<(), ApiError> {
        self.api.next_station().await
    }

    /// Skip to the previous station.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn previous(&self) -> Result<(), ApiError> {
        self.api.previous_station().await
    }

    /// Pause; a radio stream can only be stopped.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn pause(&self) -> Result<(), ApiError> {
        self.api.stop().await
    }

    /// Resume playback.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn resume(&self) -> Result<(), ApiError> {
        self.api.play().await
    }

    /// Stop playback.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn stop(&self) -> Result<(), ApiError> {
        self.api.stop().await
    }

    /// Start playback.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn play(&self) -> Result<(), ApiError> {
        self.api.play().await
    }

    /// Pause when playing, resume otherwise.
    ///
    /// # Errors
    /// Returns error if the state cannot be fetched or the command fails.
    pub async fn play_pause(&self) -> Result<(), ApiError> {
        match self.playback_status().await? {
            PlaybackStatus::Playing => self.pause().await,
            PlaybackStatus::Paused | PlaybackStatus::Stopped => self.resume().await,
        }
    }

    /// Play a stream URI.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn open_uri(&self, uri: &str) -> Result<(), ApiError> {
        self.api.play_url(uri).await
    }

    /// Ask the player to exit.
    ///
    /// # Errors
    /// Returns error if the player rejects the command.
    pub async fn quit(&self) -> Result<(), ApiError> {
        self.api.quit().await
    }

    /// Window raising is unsupported.
    pub fn raise(&self) {}

    /// Seeking is unsupported; ignored.
    pub fn seek(&self, offset: i64) {
        debug!(offset, "Ignoring seek request");
    }

    /// Playback position; streams have none.
    pub fn position(&self) -> i64 {
        0
    }

    /// Fullscreen is unsupported.
    pub fn fullscreen(&self) -> bool {
        false
    }

    /// Loop mode; always none.
    pub fn loop_status(&self) -> LoopStatus {
        LoopStatus::None
    }

    /// Shuffle; always off.
    pub fn shuffle(&self) -> bool {
        false
    }

    /// Playback rate, fixed.
    pub fn rate(&self) -> f64 {
        DEFAULT_RATE
    }

    /// Playlists of the playlist stub.
    pub fn playlists(
        &self,
        _index: u32,
        _max_count: u32,
        _order: &str,
        _reverse: bool,
    ) -> Vec<Playlist> {
        Vec::new()
    }

    /// Number of playlists.
    pub fn playlist_count(&self) -> u32 {
        0
    }

    /// There is never an active playlist.
    pub fn active_playlist(&self) -> Option<Playlist> {
        None
    }
}

/// Playlist entry as reported by the `Playlists` interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Object path identifying the playlist
    pub id: String,
    /// Display name
    pub name: String,
    /// Icon URI
    pub icon: String,
}
