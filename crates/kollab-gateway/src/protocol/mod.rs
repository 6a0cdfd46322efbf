//! Wire protocol
//!
//! Client-to-server event frames. Server-to-client frames are the
//! `PushEvent` type from `kollab-core`, serialized with the same
//! `{"event": ..., "data": ...}` shape.

mod events;

pub use events::{ClientEvent, JoinPayload, TypingTarget};
