/// Player API trait definitions
pub mod api;
/// D-Bus client with bounded connection retry
pub mod client;
/// Player API error types
pub mod error;
#[cfg(test)]
pub(crate) mod fake;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Player state, bookmark and config types
pub mod types;

pub use api::*;
pub use client::*;
pub use error::*;
pub use types::*;
