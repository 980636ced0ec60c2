use zbus::fdo;

const SERVICE_UNKNOWN: &str = "org.freedesktop.DBus.Error.ServiceUnknown";
const NO_REPLY: &str = "org.freedesktop.DBus.Error.NoReply";

/// Errors that can occur while talking to the Radiotray-NG D-Bus API
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The player never registered its bus name within the retry bound
    #[error("Radiotray-NG D-Bus service unavailable after {attempts} attempts")]
    ServiceUnavailable {
        /// Number of connection attempts made
        attempts: u32,
    },

    /// The player's bus name is not registered (yet)
    #[error("Radiotray-NG D-Bus service is not registered: {0}")]
    ServiceNotRegistered(String),

    /// A structured payload could not be decoded
    #[error("Malformed payload returned by '{method}': {source}")]
    Protocol {
        /// Remote method that returned the payload
        method: &'static str,
        /// Decoding error
        #[source]
        source: serde_json::Error,
    },

    /// The peer disconnected before replying
    #[error("Radiotray-NG exited before answering '{method}'")]
    PeerGone {
        /// Remote method that got no reply
        method: &'static str,
    },

    /// Any other failure of a remote call
    #[error("Radiotray-NG call '{method}' failed: {source}")]
    Remote {
        /// Remote method that failed
        method: &'static str,
        /// Transport error
        #[source]
        source: zbus::Error,
    },

    /// The session bus itself could not be reached
    #[error("D-Bus connection failed: {0}")]
    Connection(#[from] zbus::Error),
}

/// Coarse classification of a D-Bus transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFault {
    /// The destination name has no owner
    ServiceUnknown,
    /// The destination dropped off the bus before replying
    NoReply,
    /// Anything else
    Other,
}

impl TransportFault {
    /// Classifies a zbus error by its structured D-Bus error name.
    pub fn of(error: &zbus::Error) -> Self {
        match error {
            zbus::Error::MethodError(name, _, _) => match name.as_str() {
                SERVICE_UNKNOWN => Self::ServiceUnknown,
                NO_REPLY => Self::NoReply,
                _ => Self::Other,
            },
            zbus::Error::FDO(inner) => Self::of_fdo(inner),
            _ => Self::Other,
        }
    }

    /// Classifies an `org.freedesktop.DBus` error.
    pub fn of_fdo(error: &fdo::Error) -> Self {
        match error {
            fdo::Error::ServiceUnknown(_) => Self::ServiceUnknown,
            fdo::Error::NoReply(_) => Self::NoReply,
            fdo::Error::ZBus(inner) => Self::of(inner),
            _ => Self::Other,
        }
    }
}

impl ApiError {
    /// Maps a failed remote call onto the error taxonomy.
    pub fn from_call(method: &'static str, source: zbus::Error) -> Self {
        match TransportFault::of(&source) {
            TransportFault::ServiceUnknown => Self::ServiceNotRegistered(source.to_string()),
            TransportFault::NoReply => Self::PeerGone { method },
            TransportFault::Other => Self::Remote { method, source },
        }
    }

    /// Whether a connection attempt failing with this error may be retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ServiceNotRegistered(_))
    }

    /// Whether this error is the expected race of a quit request against the
    /// player's own exit.
    pub fn is_shutdown_race(&self) -> bool {
        matches!(self, Self::PeerGone { .. })
    }
}
