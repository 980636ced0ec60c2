#![allow(missing_docs)]

use std::collections::HashMap;

use tracing::debug;
use zbus::{
    fdo, interface,
    object_server::SignalEmitter,
    zvariant::{ObjectPath, OwnedObjectPath, OwnedValue},
};

use super::{
    adapter::{MIME_TYPES, PLAYLIST_ORDERINGS, Playlist, ProtocolAdapter, URI_SCHEMES},
    types::Capabilities,
};
use crate::services::radiotray::ApiError;

fn failed(error: ApiError) -> fdo::Error {
    fdo::Error::Failed(error.to_string())
}

/// `org.mpris.MediaPlayer2` served on behalf of Radiotray-NG
pub struct RootInterface {
    adapter: ProtocolAdapter,
}

impl RootInterface {
    pub fn new(adapter: ProtocolAdapter) -> Self {
        Self { adapter }
    }
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootInterface {
    async fn quit(&self) -> fdo::Result<()> {
        self.adapter.quit().await.map_err(failed)
    }

    fn raise(&self) {
        self.adapter.raise();
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_quit(&self) -> bool {
        self.adapter.can(Capabilities::QUIT)
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_raise(&self) -> bool {
        self.adapter.can(Capabilities::RAISE)
    }

    #[zbus(property)]
    fn fullscreen(&self) -> bool {
        self.adapter.fullscreen()
    }

    #[zbus(property)]
    fn set_fullscreen(&self, fullscreen: bool) {
        debug!(fullscreen, "Ignoring fullscreen request");
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_set_fullscreen(&self) -> bool {
        self.adapter.can(Capabilities::FULLSCREEN)
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn has_track_list(&self) -> bool {
        self.adapter.can(Capabilities::TRACK_LIST)
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn identity(&self) -> String {
        self.adapter.identity().to_string()
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn desktop_entry(&self) -> String {
        self.adapter.desktop_entry().to_string()
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn supported_uri_schemes(&self) -> Vec<String> {
        URI_SCHEMES.iter().map(|s| s.to_string()).collect()
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn supported_mime_types(&self) -> Vec<String> {
        MIME_TYPES.iter().map(|s| s.to_string()).collect()
    }
}

/// `org.mpris.MediaPlayer2.Player` served on behalf of Radiotray-NG
pub struct PlayerInterface {
    adapter: ProtocolAdapter,
}

impl PlayerInterface {
    pub fn new(adapter: ProtocolAdapter) -> Self {
        Self { adapter }
    }
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerInterface {
    async fn next(&self) -> fdo::Result<()> {
        self.adapter.next().await.map_err(failed)
    }

    async fn previous(&self) -> fdo::Result<()> {
        self.adapter.previous().await.map_err(failed)
    }

    async fn pause(&self) -> fdo::Result<()> {
        self.adapter.pause().await.map_err(failed)
    }

    async fn play_pause(&self) -> fdo::Result<()> {
        self.adapter.play_pause().await.map_err(failed)
    }

    async fn stop(&self) -> fdo::Result<()> {
        self.adapter.stop().await.map_err(failed)
    }

    async fn play(&self) -> fdo::Result<()> {
        self.adapter.play().await.map_err(failed)
    }

    fn seek(&self, offset: i64) {
        self.adapter.seek(offset);
    }

    fn set_position(&self, track_id: ObjectPath<'_>, position: i64) {
        debug!(%track_id, position, "Ignoring set position request");
    }

    async fn open_uri(&self, uri: String) -> fdo::Result<()> {
        self.adapter.open_uri(&uri).await.map_err(failed)
    }

    #[zbus(signal)]
    async fn seeked(emitter: &SignalEmitter<'_>, position: i64) -> zbus::Result<()>;

    #[zbus(property)]
    async fn playback_status(&self) -> fdo::Result<String> {
        let status = self.adapter.playback_status().await.map_err(failed)?;
        Ok(<&'static str>::from(status).to_string())
    }

    #[zbus(property)]
    fn loop_status(&self) -> String {
        <&'static str>::from(self.adapter.loop_status()).to_string()
    }

    #[zbus(property)]
    fn set_loop_status(&self, loop_status: String) {
        debug!(%loop_status, "Ignoring loop status request");
    }

    #[zbus(property)]
    fn rate(&self) -> f64 {
        self.adapter.rate()
    }

    #[zbus(property)]
    fn set_rate(&self, rate: f64) {
        debug!(rate, "Ignoring rate request");
    }

    #[zbus(property)]
    fn shuffle(&self) -> bool {
        self.adapter.shuffle()
    }

    #[zbus(property)]
    fn set_shuffle(&self, shuffle: bool) {
        debug!(shuffle, "Ignoring shuffle request");
    }

    #[zbus(property)]
    async fn metadata(&self) -> fdo::Result<HashMap<String, OwnedValue>> {
        let metadata = self.adapter.metadata().await.map_err(failed)?;
        metadata
            .to_dbus()
            .map_err(|e| fdo::Error::Failed(format!("Failed to encode metadata: {e}")))
    }

    #[zbus(property)]
    async fn volume(&self) -> fdo::Result<f64> {
        self.adapter.volume().await.map_err(failed)
    }

    /// Forwarded as the truncated 0-100 level; mute is left untouched.
    #[zbus(property)]
    async fn set_volume(&self, volume: f64) -> zbus::Result<()> {
        self.adapter
            .set_volume(volume)
            .await
            .map_err(|e| zbus::Error::from(failed(e)))
    }

    #[zbus(property(emits_changed_signal = "false"))]
    fn position(&self) -> i64 {
        self.adapter.position()
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn minimum_rate(&self) -> f64 {
        self.adapter.rate()
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn maximum_rate(&self) -> f64 {
        self.adapter.rate()
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_go_next(&self) -> bool {
        self.adapter.can(Capabilities::GO_NEXT)
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_go_previous(&self) -> bool {
        self.adapter.can(Capabilities::GO_PREVIOUS)
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_play(&self) -> bool {
        self.adapter.can(Capabilities::PLAY)
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_pause(&self) -> bool {
        self.adapter.can(Capabilities::PAUSE)
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_seek(&self) -> bool {
        self.adapter.can(Capabilities::SEEK)
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn can_control(&self) -> bool {
        self.adapter.can(Capabilities::CONTROL)
    }
}

/// `(id, name, icon)` as carried by the `Playlists` interface
type DbusPlaylist = (OwnedObjectPath, String, String);

fn playlist_to_dbus(playlist: Playlist) -> fdo::Result<DbusPlaylist> {
    let id = OwnedObjectPath::try_from(playlist.id.as_str())
        .map_err(|e| fdo::Error::Failed(format!("Invalid playlist id '{}': {e}", playlist.id)))?;
    Ok((id, playlist.name, playlist.icon))
}

/// `org.mpris.MediaPlayer2.Playlists` served on behalf of Radiotray-NG
pub struct PlaylistsInterface {
    adapter: ProtocolAdapter,
}

impl PlaylistsInterface {
    pub fn new(adapter: ProtocolAdapter) -> Self {
        Self { adapter }
    }
}

#[interface(name = "org.mpris.MediaPlayer2.Playlists")]
impl PlaylistsInterface {
    fn activate_playlist(&self, playlist_id: ObjectPath<'_>) {
        debug!(%playlist_id, "Ignoring playlist activation");
    }

    fn get_playlists(
        &self,
        index: u32,
        max_count: u32,
        order: String,
        reverse_order: bool,
    ) -> fdo::Result<Vec<DbusPlaylist>> {
        self.adapter
            .playlists(index, max_count, &order, reverse_order)
            .into_iter()
            .map(playlist_to_dbus)
            .collect()
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn playlist_count(&self) -> u32 {
        self.adapter.playlist_count()
    }

    #[zbus(property(emits_changed_signal = "const"))]
    fn orderings(&self) -> Vec<String> {
        PLAYLIST_ORDERINGS.iter().map(|s| s.to_string()).collect()
    }

    /// `(false, ("/", "", ""))` when no playlist is active.
    #[zbus(property(emits_changed_signal = "const"))]
    fn active_playlist(&self) -> fdo::Result<(bool, DbusPlaylist)> {
        match self.adapter.active_playlist() {
            Some(playlist) => Ok((true, playlist_to_dbus(playlist)?)),
            None => Ok((
                false,
                (
                    ObjectPath::from_static_str_unchecked("/").into(),
                    String::new(),
                    String::new(),
                ),
            )),
        }
    }
}
