/// Recursive structure printer for arbitrary JSON.
///
/// Objects print one line per key, arrays one line per index. Containers get
/// a trailing `:` and their contents one level deeper; leaves go on the same
/// line after ` = `. Keys keep document order.
use std::borrow::Cow;
use std::io::{self, Write};

use serde_json::Value;

/// Spaces per depth level.
pub const INDENT_WIDTH: usize = 2;

/// Literal text of a value: strings without quotes, everything else as compact JSON.
#[must_use]
pub fn literal(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Write `value` starting at `depth`.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_structure<W: Write + ?Sized>(out: &mut W, value: &Value, depth: usize) -> io::Result<()> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                write_entry(out, key, child, depth)?;
            }
            Ok(())
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                write_entry(out, &index.to_string(), child, depth)?;
            }
            Ok(())
        }
        leaf => {
            write_indent(out, depth)?;
            writeln!(out, "{}", literal(leaf))
        }
    }
}

fn write_entry<W: Write + ?Sized>(out: &mut W, key: &str, value: &Value, depth: usize) -> io::Result<()> {
    write_indent(out, depth)?;
    if value.is_object() || value.is_array() {
        writeln!(out, "{key}:")?;
        write_structure(out, value, depth + 1)
    } else {
        writeln!(out, "{key} = {}", literal(value))
    }
}

fn write_indent<W: Write + ?Sized>(out: &mut W, depth: usize) -> io::Result<()> {
    write!(out, "{:width$}", "", width = depth * INDENT_WIDTH)
}
