//! Relay seams (ports) - the interfaces the relay orchestrates
//!
//! The domain layer defines what it needs; infrastructure provides the
//! implementation. Keeping the live-push mechanism behind [`Notifier`]
//! means the in-process registry can later be swapped for a distributed
//! channel without touching relay logic.

mod notifier;
mod store;

pub use notifier::Notifier;
pub use store::{MessageStore, StoreResult};
