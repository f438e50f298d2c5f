/// Reply batch decoding and text rendering.
use std::io::{self, Write};

use serde_json::Value;
use tracing::{debug, warn};

use super::pretty::{literal, write_structure};
use super::shape::ReplyShape;

/// Depth at which the `values` of an attribute list are printed.
const VALUES_DEPTH: usize = 1;

/// What came back from the game, after decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBatch {
    /// One reply per submitted command, in order.
    Replies(Vec<Value>),
    /// The buffer was not a JSON document; kept as text for display.
    Raw(String),
}

impl ReplyBatch {
    /// Decode a received buffer.
    ///
    /// A top-level array is the batch itself. Any other JSON value is taken as
    /// a batch of one. Bytes that do not decode as JSON fall back to
    /// [`ReplyBatch::Raw`] with a warning.
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Array(replies)) => {
                debug!(count = replies.len(), "decoded reply batch");
                Self::Replies(replies)
            }
            Ok(single) => {
                debug!("reply is not an array, rendering it as a single reply");
                Self::Replies(vec![single])
            }
            Err(err) => {
                warn!(%err, len = bytes.len(), "reply is not valid JSON, showing raw text");
                Self::Raw(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

/// Render one reply according to its shape.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_reply<W: Write + ?Sized>(out: &mut W, reply: &Value) -> io::Result<()> {
    match ReplyShape::classify(reply) {
        ReplyShape::Scalar(value) => writeln!(out, "{}", literal(value)),
        ReplyShape::Error(message) => writeln!(out, "Error: {}", literal(message)),
        ReplyShape::AttributeList { attributes, values } => {
            writeln!(out, "Attributes:")?;
            for desc in &attributes {
                writeln!(out, "  - {}: {}", literal(desc.attribute), literal(desc.kind))?;
            }
            if let Some(values) = values {
                writeln!(out, "Values:")?;
                write_structure(out, values, VALUES_DEPTH)?;
            }
            Ok(())
        }
        ReplyShape::OpaqueArray { elements } => {
            writeln!(out, "Array with {} elements", literal(elements))
        }
        ReplyShape::Generic(value) => write_structure(out, value, 0),
    }
}

/// Render every reply in order, or the raw text when decoding failed.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn render_batch<W: Write + ?Sized>(out: &mut W, batch: &ReplyBatch) -> io::Result<()> {
    match batch {
        ReplyBatch::Replies(replies) => {
            for reply in replies {
                render_reply(out, reply)?;
            }
            Ok(())
        }
        ReplyBatch::Raw(text) if text.ends_with('\n') => write!(out, "{text}"),
        ReplyBatch::Raw(text) => writeln!(out, "{text}"),
    }
}
