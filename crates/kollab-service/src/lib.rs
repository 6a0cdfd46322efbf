//! # kollab-service
//!
//! Relay services orchestrating the message store and the live-push
//! notifier. The services own no persistent state; they are written
//! against the `kollab-core` traits only, so the store and the push
//! mechanism can both be swapped without touching relay logic.

pub mod services;

pub use services::{MessageRelay, TypingKind, TypingRelay};
