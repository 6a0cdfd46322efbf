//! Push events delivered to live connections

mod push_event;

pub use push_event::{
    ErrorPayload, MessageIdPayload, PushEvent, TypingPayload, UserStatusPayload,
};
