/// A single-exchange TCP connection to the game's inspection port.
///
/// The stream is opened with a bounded connect, used for exactly one write and
/// one bounded read, and shut down when the `Connection` is dropped.
use std::fmt;
use std::io::{Read, Write};
use std::net::{IpAddr, Ipv6Addr, Shutdown, SocketAddr, TcpStream};
use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::debug;

use super::errors::ConnError;

/// Port the game listens on for inspection commands.
pub const DEFAULT_PORT: u16 = 32145;

/// Bound on both connect and receive, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Receive buffer size; a reply must fit in one read.
pub const DEFAULT_MAX_REPLY_BYTES: NonZeroUsize = NonZeroUsize::new(1500).unwrap();

/// Address of the inspection port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: IpAddr::V6(Ipv6Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl Endpoint {
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.socket_addr().fmt(f)
    }
}

/// An open stream to the game.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    endpoint: Endpoint,
}

impl Connection {
    /// Connect to `endpoint`, waiting at most `timeout`.
    ///
    /// The same bound is applied to later reads and writes.
    ///
    /// # Errors
    ///
    /// Returns `ConnError::ConnectFailed` if the stream cannot be established,
    /// `ConnError::Io` if the socket timeouts cannot be set.
    pub fn open(endpoint: Endpoint, timeout: Duration) -> Result<Self, ConnError> {
        let stream = TcpStream::connect_timeout(&endpoint.socket_addr(), timeout)
            .map_err(ConnError::ConnectFailed)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        debug!(%endpoint, ?timeout, "connected");
        Ok(Self { stream, endpoint })
    }

    /// Send the whole request in one write.
    ///
    /// # Errors
    ///
    /// Returns `ConnError::Io` on write failure.
    pub fn send(&mut self, request: &[u8]) -> Result<(), ConnError> {
        self.stream.write_all(request)?;
        self.stream.flush()?;
        debug!(bytes = request.len(), "request sent");
        Ok(())
    }

    /// Read one reply of at most `max_bytes` in a single bounded read.
    ///
    /// # Errors
    ///
    /// - `ConnError::Timeout`: nothing arrived in time
    /// - `ConnError::Closed`: the game closed the stream without replying
    /// - `ConnError::Io`: any other read failure
    pub fn receive(&mut self, max_bytes: NonZeroUsize) -> Result<Vec<u8>, ConnError> {
        let mut buf = vec![0u8; max_bytes.get()];
        let n = self.stream.read(&mut buf).map_err(ConnError::from_read)?;
        if n == 0 {
            return Err(ConnError::Closed);
        }
        buf.truncate(n);
        debug!(bytes = n, "reply received");
        Ok(buf)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // The peer may already be gone; closing is best effort.
        let _ = self.stream.shutdown(Shutdown::Both);
        debug!(endpoint = %self.endpoint, "connection closed");
    }
}
