//! Fakes shared by the integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use radiotray_mpris::{
    services::{
        mpris::{EventSink, Notification},
        radiotray::{
            ApiError, BookmarkGroup, Bookmarks, PlayerApi, PlayerApiConnector, PlayerConfig,
            PlayerState, Station,
        },
    },
    supervisor::ProcessSupervisor,
};
use serde_json::{Value, json};

#[derive(Default)]
struct FakeState {
    state: PlayerState,
    calls: Vec<String>,
    state_error: Option<fn() -> ApiError>,
    quit_error: Option<fn() -> ApiError>,
}

/// In-memory player API that records every command it receives.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn with_state(pairs: &[(&str, Value)]) -> Self {
        let api = Self::default();
        api.set_state(pairs);
        api
    }

    /// Replace the whole reported state.
    pub fn set_state(&self, pairs: &[(&str, Value)]) {
        self.inner.lock().unwrap().state = pairs.iter().map(|(k, v)| (*k, v.clone())).collect();
    }

    /// Change a field in place, or append it if the player did not report it.
    pub fn set_field(&self, key: &str, value: Value) {
        let mut inner = self.inner.lock().unwrap();
        let mut replaced = false;
        let mut fields: Vec<(String, Value)> = inner
            .state
            .iter()
            .map(|(k, v)| {
                if k == key {
                    replaced = true;
                    (k.clone(), value.clone())
                } else {
                    (k.clone(), v.clone())
                }
            })
            .collect();
        if !replaced {
            fields.push((key.to_string(), value));
        }
        inner.state = fields.into_iter().collect();
    }

    pub fn fail_state_with(&self, error: fn() -> ApiError) {
        self.inner.lock().unwrap().state_error = Some(error);
    }

    pub fn fail_quit_with(&self, error: fn() -> ApiError) {
        self.inner.lock().unwrap().quit_error = Some(error);
    }

    /// Commands received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.inner.lock().unwrap().calls.push(call.into());
    }
}

#[async_trait]
impl PlayerApi for FakeApi {
    async fn player_state(&self) -> Result<PlayerState, ApiError> {
        let inner = self.inner.lock().unwrap();
        match inner.state_error {
            Some(error) => Err(error()),
            None => Ok(inner.state.clone()),
        }
    }

    async fn config(&self) -> Result<PlayerConfig, ApiError> {
        let mut config = PlayerConfig::new();
        config.insert("volume_level".to_string(), json!(50));
        Ok(config)
    }

    async fn bookmarks(&self) -> Result<Bookmarks, ApiError> {
        Ok(vec![BookmarkGroup {
            group: "Jazz".to_string(),
            image: None,
            stations: vec![Station {
                name: "Swing FM".to_string(),
                url: "http://swing.example/stream".to_string(),
                image: None,
            }],
        }])
    }

    async fn play(&self) -> Result<(), ApiError> {
        self.record("play");
        Ok(())
    }

    async fn stop(&self) -> Result<(), ApiError> {
        self.record("stop");
        Ok(())
    }

    async fn mute(&self) -> Result<(), ApiError> {
        self.record("mute");
        Ok(())
    }

    async fn set_volume(&self, level: u8) -> Result<(), ApiError> {
        self.record(format!("set_volume:{level}"));
        Ok(())
    }

    async fn volume_up(&self) -> Result<(), ApiError> {
        self.record("volume_up");
        Ok(())
    }

    async fn volume_down(&self) -> Result<(), ApiError> {
        self.record("volume_down");
        Ok(())
    }

    async fn next_station(&self) -> Result<(), ApiError> {
        self.record("next_station");
        Ok(())
    }

    async fn previous_station(&self) -> Result<(), ApiError> {
        self.record("previous_station");
        Ok(())
    }

    async fn play_station(&self, group: &str, station: &str) -> Result<(), ApiError> {
        self.record(format!("play_station:{group}/{station}"));
        Ok(())
    }

    async fn play_url(&self, url: &str) -> Result<(), ApiError> {
        self.record(format!("play_url:{url}"));
        Ok(())
    }

    async fn reload_bookmarks(&self) -> Result<(), ApiError> {
        self.record("reload_bookmarks");
        Ok(())
    }

    async fn quit(&self) -> Result<(), ApiError> {
        self.record("quit");
        match self.inner.lock().unwrap().quit_error {
            Some(error) => Err(error()),
            None => Ok(()),
        }
    }
}

/// Sink that keeps every notification it receives.
#[derive(Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn notify(&self, notification: Notification) -> zbus::Result<()> {
        self.received.lock().unwrap().push(notification);
        Ok(())
    }
}

/// Connector handing out clones of one fake API.
pub struct FakeConnector {
    pub api: FakeApi,
    connects: Mutex<u32>,
    error: Option<fn() -> ApiError>,
}

impl FakeConnector {
    pub fn new(api: FakeApi) -> Self {
        Self {
            api,
            connects: Mutex::new(0),
            error: None,
        }
    }

    pub fn failing(error: fn() -> ApiError) -> Self {
        Self {
            api: FakeApi::default(),
            connects: Mutex::new(0),
            error: Some(error),
        }
    }

    pub fn connects(&self) -> u32 {
        *self.connects.lock().unwrap()
    }
}

#[async_trait]
impl PlayerApiConnector for FakeConnector {
    type Api = FakeApi;

    async fn connect(&self) -> Result<FakeApi, ApiError> {
        *self.connects.lock().unwrap() += 1;
        match self.error {
            Some(error) => Err(error()),
            None => Ok(self.api.clone()),
        }
    }
}

/// Starts `program args...` as a stand-in for the player. The child is
/// killed when the test drops its handle.
pub fn spawn_player(program: &str, args: &[&str]) -> ProcessSupervisor {
    let mut command = tokio::process::Command::new(program);
    command.args(args).kill_on_drop(true);
    ProcessSupervisor::from_command(command).unwrap()
}

/// A player process that stays alive for the duration of a test.
pub fn long_running_player() -> ProcessSupervisor {
    spawn_player("sleep", &["30"])
}

/// A player process that has already exited.
pub async fn exited_player() -> ProcessSupervisor {
    let supervisor = spawn_player("true", &[]);
    for _ in 0..200 {
        if !supervisor.is_running().await {
            return supervisor;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("`true` did not exit");
}

pub fn peer_gone() -> ApiError {
    ApiError::PeerGone { method: "quit" }
}

pub fn remote_failure() -> ApiError {
    ApiError::Remote {
        method: "quit",
        source: zbus::Error::Failure("access denied".to_string()),
    }
}

pub fn unavailable() -> ApiError {
    ApiError::ServiceUnavailable { attempts: 30 }
}
