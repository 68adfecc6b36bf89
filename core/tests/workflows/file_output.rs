// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! File workflow tests.
//!
//! These tests run `convert_file` against real files and check that the
//! destination is only ever replaced by a complete calendar.

use std::fs;

use csv2ics_core::{Config, Error, convert_file};

use crate::common::{
    TempWorkspace, assert_file_absent, assert_lines_within, fixed_stamp, no_skip_config,
    parse_events, table, team_sync_table,
};

#[test]
fn file_conversion_writes_calendar() {
    // Arrange
    let ws = TempWorkspace::with_table(&team_sync_table()).unwrap();

    // Act
    let count = convert_file(&ws.input, &ws.output, &Config::default(), fixed_stamp()).unwrap();

    // Assert
    assert_eq!(count, 1);
    let text = fs::read_to_string(&ws.output).unwrap();
    assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(text.ends_with("END:VCALENDAR\r\n"));
    assert_lines_within(&text, 75);
    assert_eq!(parse_events(&text).len(), 1);
    assert_eq!(ws.entry_count().unwrap(), 2, "no temporary file is left behind");
}

#[test]
fn file_schema_gate_writes_nothing() {
    let ws = TempWorkspace::with_table("Subject,Start Date\r\nA,01/05/2021\r\n").unwrap();

    let err = convert_file(&ws.input, &ws.output, &Config::default(), fixed_stamp()).unwrap_err();

    match err {
        Error::Schema { missing } => {
            assert!(missing.contains(&"End Date".to_string()));
            assert!(!missing.contains(&"Subject".to_string()));
        }
        e => panic!("unexpected error: {e}"),
    }
    assert_file_absent(&ws.output);
    assert_eq!(ws.entry_count().unwrap(), 1);
}

#[test]
fn file_failed_run_keeps_existing_destination() {
    let ws = TempWorkspace::with_table(&table(&[
        "Good,01/05/2021,09:00,01/05/2021,10:00,False,,,False",
        "Bad,not a date,09:00,01/05/2021,10:00,False,,,False",
    ]))
    .unwrap();
    fs::write(&ws.output, "previous calendar").unwrap();

    let err = convert_file(&ws.input, &ws.output, &no_skip_config(), fixed_stamp()).unwrap_err();

    assert!(matches!(err, Error::TemporalParse { .. }));
    assert_eq!(fs::read_to_string(&ws.output).unwrap(), "previous calendar");
}

#[test]
fn file_blank_row_aborts_run() {
    let ws = TempWorkspace::with_table(&table(&[
        "A,01/05/2021,09:00,01/05/2021,10:00,False,,,False",
        ",,,,,,,,",
    ]))
    .unwrap();

    let err = convert_file(&ws.input, &ws.output, &no_skip_config(), fixed_stamp()).unwrap_err();

    assert!(matches!(err, Error::RowFormat { row: 2 }));
    assert_file_absent(&ws.output);
}

#[test]
fn file_missing_input_is_io_error() {
    let ws = TempWorkspace::with_table("").unwrap();
    let missing = ws.input.with_file_name("absent.csv");

    let err = convert_file(&missing, &ws.output, &Config::default(), fixed_stamp()).unwrap_err();

    assert!(matches!(err, Error::Io { ref path, .. } if *path == missing));
    assert_file_absent(&ws.output);
}

#[test]
fn file_invalid_utf8_is_rejected() {
    let ws = TempWorkspace::with_table("").unwrap();
    fs::write(&ws.input, b"Subject\xff,Start Date\r\n").unwrap();

    let err = convert_file(&ws.input, &ws.output, &Config::default(), fixed_stamp()).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert_file_absent(&ws.output);
}
