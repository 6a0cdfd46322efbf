//! Model ↔ entity mappers

mod message;
