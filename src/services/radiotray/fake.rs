use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiError, Bookmarks, PlayerApi, PlayerConfig, PlayerState};

/// Player API answering from a fixed state and recording every command.
#[derive(Default)]
pub(crate) struct RecordingApi {
    state: PlayerState,
    calls: Mutex<Vec<String>>,
}

impl RecordingApi {
    pub(crate) fn with_state(pairs: &[(&str, Value)]) -> Self {
        Self {
            state: pairs.iter().map(|(k, v)| (*k, v.clone())).collect(),
            calls: Mutex::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: impl Into<String>) -> Result<(), ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.into());
        }
        Ok(())
    }
}

#[async_trait]
impl PlayerApi for RecordingApi {
    async fn player_state(&self) -> Result<PlayerState, ApiError> {
        Ok(self.state.clone())
    }

    async fn config(&self) -> Result<PlayerConfig, ApiError> {
        Ok(PlayerConfig::new())
    }

    async fn bookmarks(&self) -> Result<Bookmarks, ApiError> {
        Ok(Bookmarks::new())
    }

    async fn play(&self) -> Result<(), ApiError> {
        self.record("play")
    }

    async fn stop(&self) -> Result<(), ApiError> {
        self.record("stop")
    }

    async fn mute(&self) -> Result<(), ApiError> {
        self.record("mute")
    }

    async fn set_volume(&self, level: u8) -> Result<(), ApiError> {
        self.record(format!("set_volume:{level}"))
    }

    async fn volume_up(&self) -> Result<(), ApiError> {
        self.record("volume_up")
    }

    async fn volume_down(&self) -> Result<(), ApiError> {
        self.record("volume_down")
    }

    async fn next_station(&self) -> Result<(), ApiError> {
        self.record("next_station")
    }

    async fn previous_station(&self) -> Result<(), ApiError> {
        self.record("previous_station")
    }

    async fn play_station(&self, group: &str, station: &str) -> Result<(), ApiError> {
        self.record(format!("play_station:{group}/{station}"))
    }

    async fn play_url(&self, url: &str) -> Result<(), ApiError> {
        self.record(format!("play_url:{url}"))
    }

    async fn reload_bookmarks(&self) -> Result<(), ApiError> {
        self.record("reload_bookmarks")
    }

    async fn quit(&self) -> Result<(), ApiError> {
        self.record("quit")
    }
}
