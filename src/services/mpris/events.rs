use async_trait::async_trait;

/// Change notifications the bridge can publish to MPRIS clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// Track metadata changed
    Metadata,

    /// Volume or mute state changed
    Volume,

    /// Playback started
    PlaybackState,

    /// Playback stopped
    PlaybackPause,
}

/// `org.mpris.MediaPlayer2.Player` properties that change at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerProperty {
    /// `PlaybackStatus`
    PlaybackStatus,
    /// `Metadata`
    Metadata,
    /// `Volume`
    Volume,
}

impl PlayerProperty {
    /// D-Bus property name.
    pub fn name(self) -> &'static str {
        match self {
            Self::PlaybackStatus => "PlaybackStatus",
            Self::Metadata => "Metadata",
            Self::Volume => "Volume",
        }
    }
}

impl Notification {
    /// Player properties announced by this notification, in emission order.
    pub fn properties(self) -> &'static [PlayerProperty] {
        match self {
            Self::Metadata => &[PlayerProperty::Metadata],
            Self::Volume => &[PlayerProperty::Volume],
            Self::PlaybackState => &[PlayerProperty::PlaybackStatus, PlayerProperty::Metadata],
            Self::PlaybackPause => &[PlayerProperty::PlaybackStatus],
        }
    }
}

/// Receiver of change notifications, normally the MPRIS object server.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Publish one notification.
    ///
    /// # Errors
    /// Returns error if the notification cannot be delivered.
    async fn notify(&self, notification: Notification) -> zbus::Result<()>;
}
