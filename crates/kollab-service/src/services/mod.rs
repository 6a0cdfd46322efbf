//! Relay services

mod message;
mod typing;

pub use message::MessageRelay;
pub use typing::{TypingKind, TypingRelay};
