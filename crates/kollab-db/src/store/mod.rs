//! Message store implementation

mod error;
mod message;

pub use message::PgMessageStore;
