//! Wiring of supervisor, player API, MPRIS server and poll loop.

use std::{future::Future, sync::Arc};

use tracing::{info, instrument};

use crate::{
    BridgeError, Result,
    config::{BridgeSettings, Config},
    notifier::ChangeNotifier,
    services::{
        mpris::{EventSink, MprisServer, ProtocolAdapter},
        radiotray::{PlayerApi, PlayerApiConnector, SessionConnector},
    },
    supervisor::{PlayerProcess, ProcessSupervisor, ShutdownHandle, ShutdownOutcome, signals},
};

/// Run the bridge until the player exits or a shutdown signal arrives.
///
/// Signal listeners are installed before anything else, so a signal during
/// startup still leads to an orderly quit of the player.
///
/// # Errors
/// Returns error if the player cannot be started, the player API or the
/// session bus fails, or the shutdown routine fails.
#[instrument(skip(config))]
pub async fn run(config: &Config, autoplay: bool) -> Result<()> {
    let shutdown = ShutdownHandle::new();
    let _signals = signals::listen(shutdown.clone())?;

    let supervisor = ProcessSupervisor::start(&config.player, autoplay)?;
    let connector = SessionConnector::new(config.bridge.retry_policy());

    let bridge = &config.bridge;
    let serving = serve(
        bridge,
        &connector,
        supervisor.process(),
        shutdown.clone(),
        |adapter| async move {
            MprisServer::start(adapter, &bridge.bus_name)
                .await
                .map_err(BridgeError::from)
        },
    );

    supervise(&supervisor, &connector, &shutdown, serving).await?;
    Ok(())
}

/// Drive `serving` until it finishes or a shutdown is requested, then ask the
/// player to quit and wait for it.
///
/// A request made before this is called, e.g. a signal during startup, still
/// runs the quit-and-wait routine. A fatal error from `serving` is returned
/// as is, without asking the player to quit.
///
/// # Errors
/// Returns the error of `serving` or of the shutdown routine.
pub async fn supervise<C, F>(
    supervisor: &ProcessSupervisor,
    connector: &C,
    shutdown: &ShutdownHandle,
    serving: F,
) -> Result<ShutdownOutcome>
where
    C: PlayerApiConnector,
    F: Future<Output = Result<()>>,
{
    tokio::select! {
        result = serving => {
            result?;
        }
        reason = shutdown.requested() => {
            info!("Shutdown requested ({reason})");
        }
    }

    let outcome = supervisor.shutdown(connector).await?;
    match outcome {
        ShutdownOutcome::NotRunning => info!("Radiotray-NG already exited"),
        ShutdownOutcome::Exited(status) => info!(?status, "Radiotray-NG quit"),
    }
    Ok(outcome)
}

/// Connect to the player, hand the adapter to `publish` and poll the player
/// until it exits, forwarding changes to the sink `publish` returned.
///
/// # Errors
/// Returns the first fatal error of any stage.
pub async fn serve<C, P, Fut, S>(
    settings: &BridgeSettings,
    connector: &C,
    process: Arc<PlayerProcess>,
    shutdown: ShutdownHandle,
    publish: P,
) -> Result<()>
where
    C: PlayerApiConnector,
    P: FnOnce(ProtocolAdapter) -> Fut,
    Fut: Future<Output = Result<S>>,
    S: EventSink,
{
    let api: Arc<dyn PlayerApi> = Arc::new(connector.connect().await?);

    let adapter = ProtocolAdapter::new(Arc::clone(&api))
        .with_identity(&settings.identity, &settings.desktop_entry);
    let sink = publish(adapter).await?;

    let mut notifier = ChangeNotifier::new(api, sink, process, shutdown)
        .with_poll_interval(settings.poll_interval());
    notifier.run().await
}
