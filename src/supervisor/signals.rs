use std::io;

use tokio::{
    signal::unix::{SignalKind, signal},
    task::JoinHandle,
};
use tracing::debug;

use super::{ShutdownHandle, ShutdownReason};

/// Install SIGINT and SIGTERM listeners that request shutdown.
///
/// The listeners do nothing besides recording the request; the quit-and-wait
/// sequence runs elsewhere.
///
/// # Errors
/// Returns error if a signal handler cannot be registered.
pub fn listen(shutdown: ShutdownHandle) -> io::Result<JoinHandle<()>> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    Ok(tokio::spawn(async move {
        let reason = tokio::select! {
            _ = interrupt.recv() => ShutdownReason::Interrupt,
            _ = terminate.recv() => ShutdownReason::Terminate,
        };
        debug!("Got signal {reason}");
        shutdown.request(reason);
    }))
}
