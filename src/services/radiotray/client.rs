use std::{future::Future, time::Duration};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};
use zbus::Connection;

use super::{
    ApiError, Bookmarks, PlayerApi, PlayerApiConnector, PlayerConfig, PlayerState,
    proxy::{OBJECT_PATH, RadiotrayNgProxy, SERVICE_NAME},
};

/// Bound on connection attempts while the player registers its bus name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one
    pub max_attempts: u32,
    /// Pause between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            delay: Duration::from_secs(1),
        }
    }
}

/// Runs `attempt` until it succeeds, fails with a non-transient error, or the
/// policy's attempt bound is exhausted.
///
/// Only [`ApiError::ServiceNotRegistered`] is retried.
///
/// # Errors
/// Returns `ApiError::ServiceUnavailable` once `max_attempts` transient
/// failures have been seen, or the first non-transient error unchanged.
pub async fn retry_connect<T, F, Fut>(policy: RetryPolicy, mut attempt: F) -> Result<T, ApiError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempts = 0;

    loop {
        attempts += 1;
        match attempt(attempts).await {
            Ok(value) => {
                if attempts > 1 {
                    info!("Connected to Radiotray-NG after {attempts} attempts");
                }
                return Ok(value);
            }
            Err(error) if error.is_transient() => {
                if attempts >= max_attempts {
                    warn!("Giving up on Radiotray-NG after {attempts} attempts: {error}");
                    return Err(ApiError::ServiceUnavailable { attempts });
                }
                debug!(attempt = attempts, "Radiotray-NG not registered yet, retrying");
                tokio::time::sleep(policy.delay).await;
            }
            Err(error) => return Err(error),
        }
    }
}

pub(crate) fn decode<T: DeserializeOwned>(
    method: &'static str,
    payload: &str,
) -> Result<T, ApiError> {
    serde_json::from_str(payload).map_err(|source| ApiError::Protocol { method, source })
}

fn failed(method: &'static str) -> impl FnOnce(zbus::Error) -> ApiError {
    move |error| ApiError::from_call(method, error)
}

/// D-Bus client for the Radiotray-NG control interface.
#[derive(Clone, Debug)]
pub struct PlayerApiClient {
    proxy: RadiotrayNgProxy<'static>,
}

impl PlayerApiClient {
    /// Connect on the session bus.
    ///
    /// # Errors
    /// Returns `ApiError::Connection` if the session bus is unreachable,
    /// `ApiError::ServiceUnavailable` if the player never shows up.
    #[instrument(skip_all)]
    pub async fn connect(policy: RetryPolicy) -> Result<Self, ApiError> {
        let connection = Connection::session().await?;
        Self::connect_on(&connection, policy).await
    }

    /// Connect using an existing bus connection.
    ///
    /// # Errors
    /// Same as [`PlayerApiClient::connect`].
    pub async fn connect_on(connection: &Connection, policy: RetryPolicy) -> Result<Self, ApiError> {
        debug!("Binding to {SERVICE_NAME} at {OBJECT_PATH}");
        retry_connect(policy, |_| Self::bind(connection)).await
    }

    async fn bind(connection: &Connection) -> Result<Self, ApiError> {
        let proxy = RadiotrayNgProxy::new(connection).await?;
        proxy
            .inner()
            .introspect()
            .await
            .map_err(|error| ApiError::from_call("Introspect", error.into()))?;
        Ok(Self { proxy })
    }
}

#[async_trait]
impl PlayerApi for PlayerApiClient {
    async fn player_state(&self) -> Result<PlayerState, ApiError> {
        debug!("Calling \"get_player_state\" of the radiotray_ng api");
        let payload = self
            .proxy
            .get_player_state()
            .await
            .map_err(failed("get_player_state"))?;
        let state: PlayerState = decode("get_player_state", &payload)?;
        debug!(?state, "Player state");
        Ok(state)
    }

    async fn config(&self) -> Result<PlayerConfig, ApiError> {
        debug!("Calling \"get_config\" of the radiotray_ng api");
        let payload = self.proxy.get_config().await.map_err(failed("get_config"))?;
        let config: PlayerConfig = decode("get_config", &payload)?;
        debug!(?config, "Config");
        Ok(config)
    }

    async fn bookmarks(&self) -> Result<Bookmarks, ApiError> {
        debug!("Calling \"get_bookmarks\" of the radiotray_ng api");
        let payload = self
            .proxy
            .get_bookmarks()
            .await
            .map_err(failed("get_bookmarks"))?;
        let bookmarks: Bookmarks = decode("get_bookmarks", &payload)?;
        debug!(groups = bookmarks.len(), "Bookmarks");
        Ok(bookmarks)
    }

    async fn play(&self) -> Result<(), ApiError> {
        debug!("Calling \"play\" of the radiotray_ng api");
        self.proxy.play().await.map_err(failed("play"))
    }

    async fn stop(&self) -> Result<(), ApiError> {
        debug!("Calling \"stop\" of the radiotray_ng api");
        self.proxy.stop().await.map_err(failed("stop"))
    }

    async fn mute(&self) -> Result<(), ApiError> {
        debug!("Calling \"mute\" of the radiotray_ng api");
        self.proxy.mute().await.map_err(failed("mute"))
    }

    async fn set_volume(&self, level: u8) -> Result<(), ApiError> {
        debug!(level, "Calling \"set_volume\" of the radiotray_ng api");
        self.proxy
            .set_volume(&level.to_string())
            .await
            .map_err(failed("set_volume"))
    }

    async fn volume_up(&self) -> Result<(), ApiError> {
        debug!("Calling \"volume_up\" of the radiotray_ng api");
        self.proxy.volume_up().await.map_err(failed("volume_up"))
    }

    async fn volume_down(&self) -> Result<(), ApiError> {
        debug!("Calling \"volume_down\" of the radiotray_ng api");
        self.proxy.volume_down().await.map_err(failed("volume_down"))
    }

    async fn next_station(&self) -> Result<(), ApiError> {
        debug!("Calling \"next_station\" of the radiotray_ng api");
        self.proxy.next_station().await.map_err(failed("next_station"))
    }

    async fn previous_station(&self) -> Result<(), ApiError> {
        debug!("Calling \"previous_station\" of the radiotray_ng api");
        self.proxy
            .previous_station()
            .await
            .map_err(failed("previous_station"))
    }

    async fn play_station(&self, group: &str, station: &str) -> Result<(), ApiError> {
        debug!(group, station, "Calling \"play_station\" of the radiotray_ng api");
        self.proxy
            .play_station(group, station)
            .await
            .map_err(failed("play_station"))
    }

    async fn play_url(&self, url: &str) -> Result<(), ApiError> {
        debug!(url, "Calling \"play_url\" of the radiotray_ng api");
        self.proxy.play_url(url).await.map_err(failed("play_url"))
    }

    async fn reload_bookmarks(&self) -> Result<(), ApiError> {
        debug!("Calling \"reload_bookmarks\" of the radiotray_ng api");
        self.proxy
            .reload_bookmarks()
            .await
            .map_err(failed("reload_bookmarks"))
    }

    async fn quit(&self) -> Result<(), ApiError> {
        debug!("Calling \"quit\" of the radiotray_ng api");
        self.proxy.quit().await.map_err(failed("quit"))
    }
}

/// Connects to Radiotray-NG on the session bus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConnector {
    policy: RetryPolicy,
}

impl SessionConnector {
    /// Create a connector with the given retry bound.
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl PlayerApiConnector for SessionConnector {
    type Api = PlayerApiClient;

    async fn connect(&self) -> Result<Self::Api, ApiError> {
        PlayerApiClient::connect(self.policy).await
    }
}
