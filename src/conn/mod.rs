/// Connection layer: one TCP stream to the game with bounded waits.
pub mod errors;
pub mod stream;

pub use errors::ConnError;
pub use stream::{Connection, DEFAULT_MAX_REPLY_BYTES, DEFAULT_TIMEOUT_MS, Endpoint};
