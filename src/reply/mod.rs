/// Reply layer: shape classification, batch decoding and text rendering.
pub mod pretty;
pub mod render;
pub mod shape;

pub use render::{ReplyBatch, render_batch};
