use std::fmt;

use tokio::sync::watch;

/// Why the bridge is shutting down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT
    Interrupt,
    /// SIGTERM
    Terminate,
    /// The player process exited on its own
    PlayerExited,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => write!(f, "SIGINT"),
            Self::Terminate => write!(f, "SIGTERM"),
            Self::PlayerExited => write!(f, "player exited"),
        }
    }
}

/// One-shot shutdown request shared by signal listeners and the poll loop.
///
/// Requesting only records the reason; the shutdown routine itself runs in
/// the main task. The first request wins.
#[derive(Clone, Debug)]
pub struct ShutdownHandle {
    tx: watch::Sender<Option<ShutdownReason>>,
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownHandle {
    /// Create a handle with no pending request.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Record a shutdown request. Returns `false` if one was already pending.
    pub fn request(&self, reason: ShutdownReason) -> bool {
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        })
    }

    /// Pending request, if any.
    pub fn reason(&self) -> Option<ShutdownReason> {
        *self.tx.borrow()
    }

    /// Resolves once a shutdown has been requested.
    pub async fn requested(&self) -> ShutdownReason {
        let mut rx = self.tx.subscribe();
        match rx.wait_for(Option::is_some).await {
            Ok(reason) => reason.unwrap_or(ShutdownReason::Interrupt),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => ShutdownReason::Interrupt,
        }
    }
}
