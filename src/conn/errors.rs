/// Errors from the TCP connection to the game.
use std::io;

use thiserror::Error;

/// Typed errors from the connection layer.
#[derive(Debug, Error)]
pub enum ConnError {
    /// The stream could not be established (refused, unreachable, or connect timed out).
    #[error("Cannot connect to the game")]
    ConnectFailed(#[source] io::Error),

    /// Nothing arrived within the receive timeout.
    #[error("Did not receive anything from game, giving up")]
    Timeout,

    /// The game closed the stream without sending a reply.
    #[error("Connection closed by the game before it replied")]
    Closed,

    /// Any other I/O failure while sending or receiving.
    #[error("Connection error: {0}")]
    Io(#[from] io::Error),
}

impl ConnError {
    /// Classify a read error, folding both timeout flavours into `Timeout`.
    #[must_use]
    pub fn from_read(err: io::Error) -> Self {
        match err.kind() {
            // Unix reports an expired SO_RCVTIMEO as WouldBlock, Windows as TimedOut.
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Self::Timeout,
            _ => Self::Io(err),
        }
    }
}
