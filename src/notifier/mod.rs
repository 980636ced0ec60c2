//! Poll loop that turns player state changes into MPRIS notifications.

/// Field-level state comparison and notification mapping
pub mod diff;

use std::{sync::Arc, time::Duration};

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, instrument};

pub use diff::{StateChange, diff_states, field_notification, notifications_for};

use crate::{
    Result,
    services::{
        mpris::{EventSink, Notification},
        radiotray::{PlayerApi, PlayerState},
    },
    supervisor::{PlayerProcess, ShutdownHandle, ShutdownReason},
};

/// Default period between two polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Lifecycle of the poll loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierPhase {
    /// No state has been observed yet
    #[default]
    Uninitialized,
    /// A baseline exists and changes are being dispatched
    Running,
    /// The player is gone; no further ticks run
    Terminating,
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// First observation stored, nothing dispatched
    Baseline,
    /// State compared against the previous snapshot
    Polled {
        /// Fields that differ from the previous snapshot
        changes: Vec<StateChange>,
        /// Notifications sent for those changes, in order
        dispatched: Vec<Notification>,
    },
    /// The player process is no longer running; shutdown was requested
    PlayerExited,
}

/// Periodically polls the player, diffs the state against the previous poll
/// and forwards the relevant changes to an [`EventSink`].
///
/// The snapshot is owned here and only touched inside [`tick`](Self::tick),
/// so ticks never observe each other's partial work.
pub struct ChangeNotifier<S: EventSink> {
    api: Arc<dyn PlayerApi>,
    sink: S,
    process: Arc<PlayerProcess>,
    shutdown: ShutdownHandle,
    snapshot: Option<PlayerState>,
    phase: NotifierPhase,
    poll_interval: Duration,
}

impl<S: EventSink> ChangeNotifier<S> {
    /// Create a notifier in the `Uninitialized` phase.
    pub fn new(
        api: Arc<dyn PlayerApi>,
        sink: S,
        process: Arc<PlayerProcess>,
        shutdown: ShutdownHandle,
    ) -> Self {
        Self {
            api,
            sink,
            process,
            shutdown,
            snapshot: None,
            phase: NotifierPhase::Uninitialized,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll period.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Current phase.
    pub fn phase(&self) -> NotifierPhase {
        self.phase
    }

    /// Most recently observed player state.
    pub fn snapshot(&self) -> Option<&PlayerState> {
        self.snapshot.as_ref()
    }

    /// The sink notifications are sent to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one poll-diff-dispatch cycle.
    ///
    /// # Errors
    /// Returns error if the player state cannot be fetched or a notification
    /// cannot be delivered. Both end the poll loop.
    pub async fn tick(&mut self) -> Result<TickOutcome> {
        if self.phase == NotifierPhase::Terminating {
            return Ok(TickOutcome::PlayerExited);
        }

        if !self.process.is_running().await {
            info!("Radiotray-NG process terminated -> exit");
            self.shutdown.request(ShutdownReason::PlayerExited);
            self.phase = NotifierPhase::Terminating;
            return Ok(TickOutcome::PlayerExited);
        }

        let state = self.api.player_state().await?;

        let Some(previous) = self.snapshot.replace(state) else {
            debug!("Stored baseline player state");
            self.phase = NotifierPhase::Running;
            return Ok(TickOutcome::Baseline);
        };

        let changes = match &self.snapshot {
            Some(current) => diff_states(&previous, current),
            None => Vec::new(),
        };
        for change in &changes {
            info!(
                field = %change.field,
                old = ?change.old_value,
                new = %change.new_value,
                "Player state changed"
            );
            if field_notification(&change.field, &change.new_value).is_none() {
                debug!("No notification for field {}", change.field);
            }
        }

        let dispatched = notifications_for(&changes);
        for notification in &dispatched {
            self.sink.notify(*notification).await?;
        }

        Ok(TickOutcome::Polled {
            changes,
            dispatched,
        })
    }

    /// Tick every poll interval until the player exits.
    ///
    /// The first tick runs one interval after the call. A slow tick delays
    /// the next one instead of letting ticks pile up.
    ///
    /// # Errors
    /// Returns the first error a tick produces.
    #[instrument(skip_all)]
    pub async fn run(&mut self) -> Result<()> {
        let mut interval = interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if matches!(self.tick().await?, TickOutcome::PlayerExited) {
                debug!("Poll loop stopped");
                return Ok(());
            }
        }
    }
}
