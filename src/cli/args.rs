/// CLI argument definitions via clap derive.
use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::conn::{DEFAULT_MAX_REPLY_BYTES, DEFAULT_TIMEOUT_MS, Endpoint};

/// lelinspect — send inspection commands to a running game.
#[derive(Debug, Parser)]
#[command(
    name = "lelinspect",
    about = "Send inspection commands to a running game and pretty-print the replies",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Commands to send, in order. `name` sends a null value; `name=value`
    /// sends `value` decoded as JSON, or as a plain string if it is not JSON.
    /// Examples: fps, "player=hero", 'spawn={"x":3,"y":4}'
    #[arg(value_name = "COMMAND[=VALUE]", required = true)]
    pub tokens: Vec<String>,

    /// Address of the game's inspection port.
    #[arg(long, value_name = "IP", default_value_t = Endpoint::default().host)]
    pub host: IpAddr,

    /// Inspection port.
    #[arg(long, value_name = "PORT", default_value_t = Endpoint::default().port)]
    pub port: u16,

    /// Connect and receive timeout in milliseconds.
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,

    /// Largest reply accepted; the reply must arrive in a single read.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_REPLY_BYTES)]
    pub max_reply_bytes: NonZeroUsize,

    /// How to print replies.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Print the request document instead of sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Log protocol steps and phase timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Endpoint assembled from `--host` and `--port`.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            host: self.host,
            port: self.port,
        }
    }

    /// Connect/receive bound.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable rendering of each reply.
    #[default]
    Text,
    /// The decoded reply batch as pretty-printed JSON.
    Json,
    /// The decoded reply batch as single-line JSON.
    Compact,
}
