//! # kollab-gateway
//!
//! WebSocket gateway for the real-time relay: tracks which users hold a
//! live connection, routes inbound client events to the relay services,
//! and pushes message/typing/presence events back out.

pub mod connection;
pub mod handlers;
pub mod notify;
pub mod protocol;
pub mod server;

pub use server::run;
