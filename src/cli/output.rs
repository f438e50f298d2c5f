/// Output formatting: rendered text or JSON for replies, request preview, errors.
use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use super::args::OutputFormat;
use crate::reply::{ReplyBatch, render_batch};
use crate::request::CommandBatch;

/// Output context passed to all writers.
pub struct OutputCtx {
    pub format: OutputFormat,
    /// When true, phase timers log their elapsed time.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(format: OutputFormat, debug: bool) -> Self {
        Self { format, debug }
    }

    /// Start a named phase timer. Logs elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Replies ---

/// Write a decoded reply batch in the selected format.
///
/// # Errors
///
/// Propagates write or serialization errors.
pub fn write_replies<W: Write + ?Sized>(
    out: &mut W,
    batch: &ReplyBatch,
    ctx: &OutputCtx,
) -> io::Result<()> {
    match (ctx.format, batch) {
        (OutputFormat::Text, _) | (_, ReplyBatch::Raw(_)) => render_batch(out, batch),
        (OutputFormat::Json, ReplyBatch::Replies(replies)) => write_json(out, replies),
        (OutputFormat::Compact, ReplyBatch::Replies(replies)) => write_compact_json(out, replies),
    }
}

// --- Request preview ---

/// Write the request document that would be sent (`--dry-run`).
///
/// # Errors
///
/// Propagates write or serialization errors.
pub fn write_request<W: Write + ?Sized>(
    out: &mut W,
    batch: &CommandBatch,
    ctx: &OutputCtx,
) -> io::Result<()> {
    match ctx.format {
        OutputFormat::Compact => write_compact_json(out, batch),
        OutputFormat::Text | OutputFormat::Json => write_json(out, batch),
    }
}

// --- Error output ---

/// Write an error as a single human-readable line to stderr.
pub fn write_error(err: &crate::errors::ClientError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{err}");
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            debug!(phase = self.label, "{ms:.2}ms");
        }
    }
}

// --- Generic JSON helpers ---

fn write_json<W: Write + ?Sized, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    writeln!(out, "{s}")
}

fn write_compact_json<W: Write + ?Sized, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> io::Result<()> {
    let s = serde_json::to_string(value)?;
    writeln!(out, "{s}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::build_batch;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_replies_are_rendered() {
        let ctx = OutputCtx::new(OutputFormat::Text, false);
        let batch = ReplyBatch::decode(br#"[{"options": {"elements": 2}}]"#);
        let out = capture(|w| write_replies(w, &batch, &ctx));
        assert_eq!(out, "Array with 2 elements\n");
    }

    #[test]
    fn test_compact_replies() {
        let ctx = OutputCtx::new(OutputFormat::Compact, false);
        let batch = ReplyBatch::decode(br#"[ {"b": 1, "a": 2} ]"#);
        let out = capture(|w| write_replies(w, &batch, &ctx));
        assert_eq!(out, "[{\"b\":1,\"a\":2}]\n");
    }

    #[test]
    fn test_raw_replies_ignore_json_format() {
        let ctx = OutputCtx::new(OutputFormat::Json, false);
        let batch = ReplyBatch::decode(b"garbage");
        let out = capture(|w| write_replies(w, &batch, &ctx));
        assert_eq!(out, "garbage\n");
    }

    #[test]
    fn test_request_preview() {
        let ctx = OutputCtx::new(OutputFormat::Compact, false);
        let batch = build_batch(&["fps", "speed=2"]).unwrap();
        let out = capture(|w| write_request(w, &batch, &ctx));
        assert_eq!(
            out,
            "[{\"command\":\"fps\",\"value\":null},{\"command\":\"speed\",\"value\":2}]\n"
        );
    }
}
