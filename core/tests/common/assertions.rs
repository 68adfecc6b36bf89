// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::path::Path;

use icalendar::{CalendarComponent, Event};

/// Parses a calendar document with an independent reader and returns its events.
///
/// # Panics
///
/// Panics if the document cannot be parsed.
pub fn parse_events(text: &str) -> Vec<Event> {
    let calendar: icalendar::Calendar = text.parse().expect("output should parse");
    calendar
        .components
        .into_iter()
        .filter_map(|c| match c {
            CalendarComponent::Event(e) => Some(e),
            _ => None,
        })
        .collect()
}

/// Asserts that every content line ends with CRLF and fits in `max` octets.
///
/// # Panics
///
/// Panics on the first offending line.
pub fn assert_lines_within(text: &str, max: usize) {
    assert!(text.ends_with("\r\n"), "document must end with CRLF");
    for line in text.trim_end_matches("\r\n").split("\r\n") {
        assert!(!line.contains('\n'), "bare LF in {line:?}");
        assert!(line.len() <= max, "line too long: {line:?}");
    }
}

/// Asserts that nothing exists at `path`.
///
/// # Panics
///
/// Panics if the path exists.
pub fn assert_file_absent(path: &Path) {
    assert!(!path.exists(), "{} should not exist", path.display());
}
