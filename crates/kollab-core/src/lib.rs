//! # kollab-core
//!
//! Domain layer for the relay: the message entity, delivery state machine,
//! push events, and the store/notifier seams. This crate has zero
//! dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{DeliveryState, Message, NewMessage};
pub use error::{RelayError, RelayResult};
pub use events::PushEvent;
pub use traits::{MessageStore, Notifier, StoreResult};
