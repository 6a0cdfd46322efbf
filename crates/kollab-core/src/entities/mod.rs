//! Domain entities

mod message;

pub use message::{DeliveryState, Message, NewMessage};
