//! Domain errors

mod relay_error;

pub use relay_error::{RelayError, RelayResult};
