/// MPRIS request translation onto the player API
pub mod adapter;
/// Change notification types
pub mod events;
/// D-Bus interface implementations
pub mod interfaces;
/// Session bus registration and signal emission
pub mod server;
/// MPRIS value types
pub mod types;

pub use adapter::*;
pub use events::*;
pub use server::*;
pub use types::*;
