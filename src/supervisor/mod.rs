//! Player process lifecycle: start, liveness, graceful shutdown.

mod process;
mod shutdown;
/// Signal listeners that request shutdown
pub mod signals;

pub use process::PlayerProcess;
pub use shutdown::{ShutdownHandle, ShutdownReason};

use std::{process::ExitStatus, sync::Arc};

use tokio::process::Command;
use tracing::{debug, info, instrument};

use crate::{
    BridgeError, Result,
    config::PlayerSettings,
    services::radiotray::{PlayerApi, PlayerApiConnector},
};

/// Result of the shutdown routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// No player process was running; nothing to do
    NotRunning,
    /// The player was asked to quit and has exited
    Exited(Option<ExitStatus>),
}

/// Starts the player and owns its process handle.
#[derive(Debug)]
pub struct ProcessSupervisor {
    process: Arc<PlayerProcess>,
}

impl ProcessSupervisor {
    /// Launch the player executable, appending the autoplay flag if asked to.
    ///
    /// # Errors
    /// Returns `BridgeError::Spawn` if the executable cannot be started.
    #[instrument(skip(settings))]
    pub fn start(settings: &PlayerSettings, autoplay: bool) -> Result<Self> {
        let mut command = Command::new(&settings.executable);
        command.args(&settings.args);
        if autoplay {
            command.arg(&settings.autoplay_flag);
        }
        Self::from_command(command)
    }

    /// Spawn a prepared command as the player.
    ///
    /// # Errors
    /// Returns `BridgeError::Spawn` if the command cannot be started.
    pub fn from_command(mut command: Command) -> Result<Self> {
        let executable = command
            .as_std()
            .get_program()
            .to_string_lossy()
            .into_owned();

        let child = command
            .spawn()
            .map_err(|source| BridgeError::Spawn {
                executable: executable.clone(),
                source,
            })?;
        info!(pid = ?child.id(), "Started {executable}");

        Ok(Self {
            process: Arc::new(PlayerProcess::new(child)),
        })
    }

    /// Supervisor for a player that was never started.
    pub fn detached() -> Self {
        Self {
            process: Arc::new(PlayerProcess::absent()),
        }
    }

    /// Shared handle to the player process.
    pub fn process(&self) -> Arc<PlayerProcess> {
        Arc::clone(&self.process)
    }

    /// Whether the player is still running.
    pub async fn is_running(&self) -> bool {
        self.process.is_running().await
    }

    /// Ask a running player to quit over a fresh API connection, then wait
    /// for it to exit. The wait has no timeout.
    ///
    /// A quit that fails because the player dropped off the bus before
    /// replying is expected and ignored.
    ///
    /// # Errors
    /// Returns error if connecting fails, the quit call fails for any other
    /// reason, or waiting on the process fails.
    #[instrument(skip_all)]
    pub async fn shutdown<C: PlayerApiConnector>(&self, connector: &C) -> Result<ShutdownOutcome> {
        if !self.process.is_running().await {
            debug!("Player process not running, nothing to stop");
            return Ok(ShutdownOutcome::NotRunning);
        }

        info!("Send a quit request to Radiotray-NG");
        let api = connector.connect().await?;
        match api.quit().await {
            Ok(()) => {}
            Err(e) if e.is_shutdown_race() => debug!("Quit not answered: {e}"),
            Err(e) => return Err(e.into()),
        }

        info!("Waiting for the process to quit...");
        let status = self.process.wait().await?;
        debug!(?status, "Player process reaped");
        Ok(ShutdownOutcome::Exited(status))
    }
}
