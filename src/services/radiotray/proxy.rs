#![allow(missing_docs)]

use zbus::{Result, proxy};

/// Well-known bus name of the Radiotray-NG service
pub const SERVICE_NAME: &str = "com.github.radiotray_ng";
/// Object path of the Radiotray-NG service
pub const OBJECT_PATH: &str = "/com/github/radiotray_ng";

/// Radiotray-NG control interface proxy
///
/// Structured getters return JSON-encoded text.
#[proxy(
    interface = "com.github.radiotray_ng",
    default_service = "com.github.radiotray_ng",
    default_path = "/com/github/radiotray_ng"
)]
pub trait RadiotrayNg {
    /// Bookmark groups and stations as JSON
    fn get_bookmarks(&self) -> Result<String>;

    /// Player configuration as JSON
    fn get_config(&self) -> Result<String>;

    /// Current player state as JSON
    fn get_player_state(&self) -> Result<String>;

    /// Toggle mute
    fn mute(&self) -> Result<()>;

    /// Switch to the next station of the current group
    fn next_station(&self) -> Result<()>;

    /// Start playback of the current station
    fn play(&self) -> Result<()>;

    /// Play a bookmarked station
    fn play_station(&self, group: &str, station: &str) -> Result<()>;

    /// Play an arbitrary stream URL
    fn play_url(&self, url: &str) -> Result<()>;

    /// Switch to the previous station of the current group
    fn previous_station(&self) -> Result<()>;

    /// Terminate the player
    fn quit(&self) -> Result<()>;

    /// Re-read the bookmarks file
    fn reload_bookmarks(&self) -> Result<()>;

    /// Set the volume, 0-100, encoded as a decimal string
    fn set_volume(&self, level: &str) -> Result<()>;

    /// Stop playback
    fn stop(&self) -> Result<()>;

    /// Lower the volume by one step
    fn volume_down(&self) -> Result<()>;

    /// Raise the volume by one step
    fn volume_up(&self) -> Result<()>;
}
