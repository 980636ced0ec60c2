use std::{io, process::ExitStatus};

use tokio::{process::Child, sync::Mutex};
use tracing::{debug, warn};

/// Handle to the spawned player process.
///
/// Created once by the supervisor and shared with the poll loop. The child is
/// cleared atomically once it has been observed to exit or has been waited
/// for, so at most one owner ever reaps it.
#[derive(Debug, Default)]
pub struct PlayerProcess {
    child: Mutex<Option<Child>>,
}

impl PlayerProcess {
    pub(crate) fn new(child: Child) -> Self {
        Self {
            child: Mutex::new(Some(child)),
        }
    }

    /// A handle with no process behind it.
    pub fn absent() -> Self {
        Self::default()
    }

    /// OS process id, while the process is tracked.
    pub async fn id(&self) -> Option<u32> {
        self.child.lock().await.as_ref().and_then(Child::id)
    }

    /// Non-blocking liveness check.
    pub async fn is_running(&self) -> bool {
        let mut guard = self.child.lock().await;
        let Some(child) = guard.as_mut() else {
            return false;
        };

        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                debug!(%status, "Player process exited");
                *guard = None;
                false
            }
            Err(e) => {
                warn!("Cannot query player process status: {e}");
                *guard = None;
                false
            }
        }
    }

    /// Block until the process exits. Returns `None` if nothing was tracked.
    ///
    /// # Errors
    /// Returns error if waiting on the child fails.
    pub async fn wait(&self) -> io::Result<Option<ExitStatus>> {
        let child = self.child.lock().await.take();
        match child {
            Some(mut child) => child.wait().await.map(Some),
            None => Ok(None),
        }
    }
}
