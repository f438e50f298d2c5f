/// Errors from building or encoding a request.
use thiserror::Error;

/// Errors that can occur while turning argument tokens into a request document.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The token has nothing before its first `=` (or is empty altogether).
    #[error("Command name is empty in token '{token}'")]
    EmptyName {
        /// The offending raw token.
        token: String,
    },

    /// The batch could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}
