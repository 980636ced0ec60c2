use async_trait::async_trait;
use tracing::{debug, info, instrument};
use zbus::{Connection, connection};

use super::{
    adapter::ProtocolAdapter,
    events::{EventSink, Notification, PlayerProperty},
    interfaces::{PlayerInterface, PlaylistsInterface, RootInterface},
};

/// Object path every MPRIS player is served at
pub const MPRIS_PATH: &str = "/org/mpris/MediaPlayer2";
/// Prefix of every MPRIS bus name
pub const MPRIS_BUS_PREFIX: &str = "org.mpris.MediaPlayer2";

/// MPRIS endpoint on the session bus.
///
/// Owns the bus name for as long as it lives; dropping it releases the name.
#[derive(Clone, Debug)]
pub struct MprisServer {
    connection: Connection,
    bus_name: String,
}

impl MprisServer {
    /// Register the adapter under `org.mpris.MediaPlayer2.<name>` with the root,
    /// `Player` and `Playlists` interfaces.
    ///
    /// # Errors
    /// Returns error if the session bus is unreachable, the name is invalid or
    /// already taken, or the interfaces cannot be served.
    #[instrument(skip(adapter))]
    pub async fn start(adapter: ProtocolAdapter, name: &str) -> zbus::Result<Self> {
        let bus_name = format!("{MPRIS_BUS_PREFIX}.{name}");

        let connection = connection::Builder::session()?
            .name(bus_name.clone())?
            .serve_at(MPRIS_PATH, RootInterface::new(adapter.clone()))?
            .serve_at(MPRIS_PATH, PlayerInterface::new(adapter.clone()))?
            .serve_at(MPRIS_PATH, PlaylistsInterface::new(adapter))?
            .build()
            .await?;

        info!("Serving MPRIS interface as {bus_name}");
        Ok(Self {
            connection,
            bus_name,
        })
    }

    /// Bus name owned by this server.
    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }
}

#[async_trait]
impl EventSink for MprisServer {
    async fn notify(&self, notification: Notification) -> zbus::Result<()> {
        debug!(
            ?notification,
            properties = ?notification.properties(),
            "Emitting PropertiesChanged"
        );

        let iface_ref = self
            .connection
            .object_server()
            .interface::<_, PlayerInterface>(MPRIS_PATH)
            .await?;
        let emitter = iface_ref.signal_emitter();
        let iface = iface_ref.get().await;

        for property in notification.properties() {
            match property {
                PlayerProperty::PlaybackStatus => iface.playback_status_changed(emitter).await?,
                PlayerProperty::Metadata => iface.metadata_changed(emitter).await?,
                PlayerProperty::Volume => iface.volume_changed(emitter).await?,
            }
        }
        Ok(())
    }
}
