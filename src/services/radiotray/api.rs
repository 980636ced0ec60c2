use async_trait::async_trait;

use super::{ApiError, Bookmarks, PlayerConfig, PlayerState};

/// Operations offered by a running Radiotray-NG instance.
///
/// Commands are fire-and-forget: success carries no value and remote
/// failures are returned unchanged.
#[async_trait]
pub trait PlayerApi: Send + Sync + 'static {
    /// Fetch the current player state
    async fn player_state(&self) -> Result<PlayerState, ApiError>;

    /// Fetch the player configuration
    async fn config(&self) -> Result<PlayerConfig, ApiError>;

    /// Fetch bookmark groups and stations
    async fn bookmarks(&self) -> Result<Bookmarks, ApiError>;

    /// Start playback
    async fn play(&self) -> Result<(), ApiError>;

    /// Stop playback
    async fn stop(&self) -> Result<(), ApiError>;

    /// Toggle mute
    async fn mute(&self) -> Result<(), ApiError>;

    /// Set the volume in the player's 0-100 range
    async fn set_volume(&self, level: u8) -> Result<(), ApiError>;

    /// Raise the volume by one step
    async fn volume_up(&self) -> Result<(), ApiError>;

    /// Lower the volume by one step
    async fn volume_down(&self) -> Result<(), ApiError>;

    /// Switch to the next station
    async fn next_station(&self) -> Result<(), ApiError>;

    /// Switch to the previous station
    async fn previous_station(&self) -> Result<(), ApiError>;

    /// Play a bookmarked station
    async fn play_station(&self, group: &str, station: &str) -> Result<(), ApiError>;

    /// Play a stream URL
    async fn play_url(&self, url: &str) -> Result<(), ApiError>;

    /// Re-read bookmarks
    async fn reload_bookmarks(&self) -> Result<(), ApiError>;

    /// Ask the player to exit
    async fn quit(&self) -> Result<(), ApiError>;
}

/// Opens fresh connections to the player API.
///
/// The shutdown routine uses its own connection rather than the one the
/// poll loop holds.
#[async_trait]
pub trait PlayerApiConnector: Send + Sync {
    /// Connection type produced
    type Api: PlayerApi + 'static;

    /// Connect, retrying while the service is not registered.
    ///
    /// # Errors
    /// Returns `ApiError::ServiceUnavailable` when the retry bound is
    /// exhausted, or the first non-transient error.
    async fn connect(&self) -> Result<Self::Api, ApiError>;
}
