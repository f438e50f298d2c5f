/// Top-level error for one inspection run.
use thiserror::Error;

use crate::conn::ConnError;
use crate::request::RequestError;

/// Anything that stops a run before all replies are printed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The tokens could not be turned into a request.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Connecting, sending or receiving failed.
    #[error(transparent)]
    Conn(#[from] ConnError),

    /// Writing the rendered output failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Exit code mapping for `ClientError` variants.
impl ClientError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Conn(ConnError::ConnectFailed(_)) => 2,
            Self::Conn(ConnError::Timeout) => 3,
            Self::Request(_) | Self::Conn(_) | Self::Output(_) => 1,
        }
    }
}
