// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module formats an [`ICalendar`] to the RFC 5545 text format, writing
//! to any `std::io::Write` implementer. Lines end with CRLF and are folded at
//! 75 octets by default.
//!
//! # Example
//!
//! ```
//! use csv2ics_ical::{ICalendar, formatter::format};
//!
//! let calendar = ICalendar::new("-//Example//Example//EN");
//! let ics = format(&calendar).unwrap();
//! assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
//! ```

mod component;
mod property;
mod value;

use std::io::{self, Write};

use crate::formatter::component::write_icalendar;
use crate::semantic::ICalendar;

pub use crate::formatter::value::escape_text;

/// Convenience function to format an `ICalendar` to a `String` (uses default options).
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(calendar: &ICalendar) -> io::Result<String> {
    FormatOptions::default().write_to_string(calendar)
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { folding: Some(75) }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Write an `ICalendar` to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, calendar: &ICalendar, w: &mut impl Write) -> io::Result<()> {
        let mut formatter = Formatter::new(w, *self);
        write_icalendar(&mut formatter, calendar)?;
        formatter.flush()
    }

    /// Write an `ICalendar` to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, calendar: &ICalendar) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(calendar, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// Everything written through the `Write` impl counts toward the current
/// line; [`Formatter::writeln`] terminates it.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
        }
    }

    /// Write a CRLF line ending.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.line_length = 0;
        Ok(())
    }

    /// Insert line folding: CRLF + SPACE, which counts as 1 octet of the new line.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n ")?;
        self.line_length = 1;
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            self.writer.write_all(buf)?;
            self.line_length += buf.len();
            return Ok(buf.len());
        };

        let mut remaining = buf;
        while !remaining.is_empty() {
            let unit = fold_unit_len(remaining);
            if self.line_length > 1 && self.line_length + unit > max_len {
                self.insert_fold()?;
            }

            let (head, tail) = remaining.split_at(unit);
            self.writer.write_all(head)?;
            self.line_length += unit;
            remaining = tail;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Length of the next unit that must not be split by a fold.
///
/// A unit is one UTF-8 encoded character, or a backslash together with the
/// character it escapes.
fn fold_unit_len(buf: &[u8]) -> usize {
    match buf {
        [] => 0,
        [b'\\', rest @ ..] if !rest.is_empty() => 1 + utf8_char_len(rest),
        _ => utf8_char_len(buf),
    }
}

/// Length of the UTF-8 sequence starting at the first byte, clamped to the buffer.
fn utf8_char_len(buf: &[u8]) -> usize {
    let len = match buf.first() {
        Some(b) if b & 0x80 == 0x00 => 1,
        Some(b) if b & 0xE0 == 0xC0 => 2,
        Some(b) if b & 0xF0 == 0xE0 => 3,
        Some(b) if b & 0xF8 == 0xF0 => 4,
        Some(_) => 1,
        None => 0,
    };
    len.min(buf.len())
}
