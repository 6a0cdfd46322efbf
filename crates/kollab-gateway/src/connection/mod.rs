//! Connection management
//!
//! Per-socket connection handles and the presence registry binding user
//! identities to their single live handle.

mod connection;
mod registry;

pub use connection::Connection;
pub use registry::PresenceRegistry;
