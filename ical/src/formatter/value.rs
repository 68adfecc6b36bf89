// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatting for iCalendar values.
//!
//! This module provides functions to format the value types of RFC 5545
//! Section 3.3 that csv2ics emits.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::value::{ValueDate, ValueDateTime, ValueTime};

/// Format a date value as `YYYYMMDD`.
pub fn write_date<W: Write>(f: &mut Formatter<W>, date: ValueDate) -> io::Result<()> {
    write!(f, "{:04}{:02}{:02}", date.year, date.month, date.day)
}

/// Format a time value as `HHMMSS[Z]`.
pub fn write_time<W: Write>(f: &mut Formatter<W>, time: ValueTime) -> io::Result<()> {
    write!(f, "{:02}{:02}{:02}", time.hour, time.minute, time.second)?;
    if time.utc {
        write!(f, "Z")?;
    }
    Ok(())
}

/// Format a date-time value as `YYYYMMDDTHHMMSS[Z]`.
pub fn write_date_time<W: Write>(f: &mut Formatter<W>, datetime: ValueDateTime) -> io::Result<()> {
    write_date(f, datetime.date)?;
    write!(f, "T")?;
    write_time(f, datetime.time)
}

/// Escape a TEXT value (RFC 5545 Section 3.3.11).
///
/// Backslash, semicolon, comma and newline are escaped; carriage returns are
/// dropped so that CRLF in the source collapses into a single `\n`.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}
