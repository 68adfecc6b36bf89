// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests: the serialized calendar is read back by the `icalendar`
//! parser and compared with the input rows.

use csv2ics_core::{Config, convert, serialize};
use icalendar::{CalendarDateTime, Component, DatePerhapsTime, EventLike};

use crate::common::{
    TEAM_SYNC_ROW, assert_lines_within, fixed_stamp, no_skip_config, parse_events, table,
    team_sync_table,
};

fn render(input: &str, config: &Config) -> String {
    let calendar = convert(input, config, fixed_stamp()).unwrap();
    serialize(&calendar, &config.prod_id).unwrap()
}

fn floating(value: Option<DatePerhapsTime>) -> String {
    match value {
        Some(DatePerhapsTime::DateTime(CalendarDateTime::Floating(dt))) => dt.to_string(),
        other => panic!("expected a floating date-time, got {other:?}"),
    }
}

fn date_only(value: Option<DatePerhapsTime>) -> String {
    match value {
        Some(DatePerhapsTime::Date(d)) => d.to_string(),
        other => panic!("expected a date, got {other:?}"),
    }
}

#[test]
fn round_trip_team_sync_with_default_skip() {
    // Arrange
    let input = team_sync_table();

    // Act
    let text = render(&input, &Config::default());
    let events = parse_events(&text);

    // Assert
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.get_summary(), Some("Team Sync"));
    assert_eq!(event.get_description(), Some("Weekly sync"));
    assert_eq!(event.get_location(), Some("Room 1"));
    assert_eq!(floating(event.get_start()), "2021-05-01 09:00:00");
    assert_eq!(floating(event.get_end()), "2021-05-01 10:00:00");
}

#[test]
fn round_trip_team_sync_as_only_row() {
    let text = render(&table(&[TEAM_SYNC_ROW]), &no_skip_config());

    let events = parse_events(&text);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].get_summary(), Some("Team Sync"));
    assert_eq!(floating(events[0].get_start()), "2021-05-01 09:00:00");
}

#[test]
fn round_trip_preserves_row_order() {
    let input = table(&[
        "Third,03/05/2021,09:00,03/05/2021,10:00,False,,,False",
        "First,01/05/2021,09:00,01/05/2021,10:00,False,,,False",
        "Second,02/05/2021,09:00,02/05/2021,10:00,False,,,False",
    ]);

    let events = parse_events(&render(&input, &no_skip_config()));

    let summaries: Vec<_> = events.iter().filter_map(|e| e.get_summary()).collect();
    assert_eq!(summaries, ["Third", "First", "Second"]);
}

#[test]
fn round_trip_all_day_event() {
    let input = table(&["Holiday,24/12/2021,,26/12/2021,,True,,,False"]);

    let events = parse_events(&render(&input, &no_skip_config()));

    assert_eq!(date_only(events[0].get_start()), "2021-12-24");
    assert_eq!(date_only(events[0].get_end()), "2021-12-27");
}

#[test]
fn day_first_dates_are_disambiguated() {
    let input = table(&["Ambiguous,03/04/2021,08:30,03/04/2021,09:00,False,,,False"]);

    let events = parse_events(&render(&input, &no_skip_config()));

    assert_eq!(floating(events[0].get_start()), "2021-04-03 08:30:00");
}

#[test]
fn empty_optional_fields_are_omitted() {
    let input = table(&["Bare,01/05/2021,09:00,01/05/2021,10:00,,,,"]);

    let text = render(&input, &no_skip_config());

    assert!(!text.contains("DESCRIPTION"));
    assert!(!text.contains("LOCATION"));
    assert!(text.lines().all(|line| !line.trim_end().ends_with(':')));
    let events = parse_events(&text);
    assert_eq!(events[0].get_description(), None);
    assert_eq!(events[0].get_location(), None);
}

#[test]
fn long_and_multibyte_text_is_folded() {
    let description = "Quarterly planning für das gesamte Team, inkl. Rückblick und Ausblick auf 2022";
    let input = table(&[&format!(
        "Planning,01/05/2021,09:00,01/05/2021,17:00,False,\"{description}\",Konferenzraum Süd,False"
    )]);

    let text = render(&input, &no_skip_config());

    assert_lines_within(&text, 75);
    assert!(text.contains("\\,"), "comma must be escaped");
    assert!(parse_events(&text)[0].get_location() == Some("Konferenzraum Süd"));
}

#[test]
fn extra_columns_do_not_change_events() {
    let input = format!(
        "Calendar,{}\r\nWork,{TEAM_SYNC_ROW}\r\n",
        crate::common::HEADER
    );

    let text = render(&input, &no_skip_config());
    let events = parse_events(&text);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].get_summary(), Some("Team Sync"));
    assert_eq!(events[0].get_location(), Some("Room 1"));
}

#[test]
fn output_is_reproducible_for_a_fixed_stamp() {
    let input = team_sync_table();
    assert_eq!(
        render(&input, &Config::default()),
        render(&input, &Config::default())
    );
    assert!(render(&input, &Config::default()).contains("DTSTAMP:20210503T000000Z\r\n"));
}
