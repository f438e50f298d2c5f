/// Request layer: turn `key` / `key=value` tokens into the wire command batch.
pub mod errors;
pub mod token;

pub use errors::RequestError;
pub use token::{CommandBatch, build_batch};
