/// MPRIS endpoint exposed to desktop clients
pub mod mpris;
/// Radiotray-NG D-Bus API client
pub mod radiotray;

pub use mpris::{EventSink, MprisServer, Notification, ProtocolAdapter};
pub use radiotray::{ApiError, PlayerApi, PlayerApiClient, PlayerApiConnector, PlayerState};
