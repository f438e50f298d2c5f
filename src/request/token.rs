/// Token parsing and batch encoding.
///
/// Each argument token is either a bare command name (`fps`) or a name with an
/// argument (`spawn={"x":3}`). Only the first `=` separates the two, so values
/// may contain `=` themselves. The right-hand side is decoded as JSON when it
/// can be; anything else is sent verbatim as a JSON string.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::errors::RequestError;

/// Separator between a command name and its argument.
pub const VALUE_SEP: char = '=';

/// One named command with its optional argument, as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command name. Never empty.
    #[serde(rename = "command")]
    pub name: String,
    /// Decoded argument, or `null` when the token had no `=`.
    pub value: Option<Value>,
}

/// Ordered list of commands, serialized as a single JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandBatch(pub Vec<Command>);

impl CommandBatch {
    /// Encode the batch as the request document sent in one write.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Encode` if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, RequestError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Decode an argument as JSON, falling back to the raw text as a string.
#[must_use]
pub fn decode_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Parse one `key` or `key=value` token.
///
/// # Errors
///
/// Returns `RequestError::EmptyName` when the name part is empty. A value that
/// is not valid JSON is never an error.
pub fn parse_token(token: &str) -> Result<Command, RequestError> {
    let (name, value) = match token.split_once(VALUE_SEP) {
        Some((name, raw)) => (name, Some(decode_value(raw))),
        None => (token, None),
    };

    if name.is_empty() {
        return Err(RequestError::EmptyName {
            token: token.to_owned(),
        });
    }

    Ok(Command {
        name: name.to_owned(),
        value,
    })
}

/// Build a batch from tokens, keeping their order.
///
/// # Errors
///
/// Returns the first `RequestError::EmptyName` encountered.
pub fn build_batch<S: AsRef<str>>(tokens: &[S]) -> Result<CommandBatch, RequestError> {
    let commands = tokens
        .iter()
        .map(|t| parse_token(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = commands.len(), "built command batch");
    Ok(CommandBatch(commands))
}
