use std::collections::HashMap;

use bitflags::bitflags;
use zbus::zvariant::{ObjectPath, OwnedValue, Value};

/// Track id reported when the player has no track list.
pub const NO_TRACK: &str = "/org/mpris/MediaPlayer2/TrackList/NoTrack";

/// Current playback state in MPRIS vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    Stopped,
}

impl PlaybackStatus {
    /// Maps a Radiotray-NG state token. The player has no paused state, so
    /// everything but `"playing"` is reported as stopped.
    pub fn from_player_state(state: &str) -> Self {
        match state {
            "playing" => Self::Playing,
            _ => Self::Stopped,
        }
    }
}

impl From<PlaybackStatus> for &'static str {
    fn from(status: PlaybackStatus) -> Self {
        match status {
            PlaybackStatus::Playing => "Playing",
            PlaybackStatus::Paused => "Paused",
            PlaybackStatus::Stopped => "Stopped",
        }
    }
}

/// Loop mode in MPRIS vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopStatus {
    /// No looping
    #[default]
    None,

    /// Loop current track
    Track,

    /// Loop entire playlist
    Playlist,
}

impl From<LoopStatus> for &'static str {
    fn from(status: LoopStatus) -> Self {
        match status {
            LoopStatus::None => "None",
            LoopStatus::Track => "Track",
            LoopStatus::Playlist => "Playlist",
        }
    }
}

/// Converts the player's 0-100 volume to an MPRIS fraction.
pub fn volume_to_fraction(level: u8) -> f64 {
    f64::from(level) / 100.0
}

/// Converts an MPRIS fraction to the player's 0-100 volume.
///
/// The scaled value is truncated, then clamped to the valid range. A tiny
/// epsilon absorbs binary rounding so that `0.29` maps back to `29`.
pub fn volume_from_fraction(fraction: f64) -> u8 {
    if fraction.is_nan() {
        return 0;
    }
    (fraction * 100.0 + VOLUME_EPSILON)
        .trunc()
        .clamp(0.0, 100.0) as u8
}

const VOLUME_EPSILON: f64 = 1e-9;

bitflags! {
    /// Optional MPRIS features the bridge supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u32 {
        /// Player can be asked to quit.
        const QUIT = 1 << 0;
        /// Player window can be raised.
        const RAISE = 1 << 1;
        /// Player supports fullscreen.
        const FULLSCREEN = 1 << 2;
        /// Player exposes a track list.
        const TRACK_LIST = 1 << 3;
        /// Player can seek.
        const SEEK = 1 << 4;
        /// Player can skip forward.
        const GO_NEXT = 1 << 5;
        /// Player can skip backward.
        const GO_PREVIOUS = 1 << 6;
        /// Player can start playback.
        const PLAY = 1 << 7;
        /// Player can pause playback.
        const PAUSE = 1 << 8;
        /// Player accepts control at all.
        const CONTROL = 1 << 9;
        /// Track list can be edited.
        const EDIT_TRACKS = 1 << 10;
    }
}

/// Metadata of the currently playing stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Artwork URL
    pub art_url: String,
    /// Stream URL
    pub url: String,
    /// Track title
    pub title: String,
    /// Track artists
    pub artists: Vec<String>,
    /// Free-form comments
    pub comments: Vec<String>,
}

impl Metadata {
    /// Renders the metadata as an MPRIS `a{sv}` map.
    ///
    /// # Errors
    /// Returns error if a value cannot be converted to an owned variant.
    pub fn to_dbus(&self) -> zbus::zvariant::Result<HashMap<String, OwnedValue>> {
        let entries: [(&str, Value<'_>); 6] = [
            (
                "mpris:trackid",
                Value::from(ObjectPath::from_static_str_unchecked(NO_TRACK)),
            ),
            ("mpris:artUrl", Value::from(self.art_url.as_str())),
            ("xesam:url", Value::from(self.url.as_str())),
            ("xesam:title", Value::from(self.title.as_str())),
            ("xesam:artist", Value::from(self.artists.clone())),
            ("xesam:comment", Value::from(self.comments.clone())),
        ];

        entries
            .into_iter()
            .map(|(key, value)| Ok((key.to_string(), OwnedValue::try_from(value)?)))
            .collect()
    }
}
