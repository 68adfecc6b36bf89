// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven workflow tests.
//!
//! These tests load configurations from TOML, the way the command line does,
//! and check how each option changes the conversion.

use csv2ics_core::{Config, DateOrder, InvalidDatePolicy, Schema, convert, serialize};
use icalendar::{Component, EventLike};

use crate::common::{fixed_stamp, parse_events, table};

fn load(text: &str) -> Config {
    let config: Config = toml::from_str(text).unwrap();
    config.validate().unwrap();
    config
}

#[test]
fn config_month_first_order() {
    let config = load(
        r#"
date_order = "mdy"
skip_first_row = false
"#,
    );
    assert_eq!(config.date_order, DateOrder::Mdy);

    let input = table(&["A,03/04/2021,,03/04/2021,,True,,,False"]);
    let calendar = convert(&input, &config, fixed_stamp()).unwrap();

    assert_eq!(calendar.events()[0].start.to_string(), "2021-03-04");
}

#[test]
fn config_skip_invalid_dates() {
    let config = load(
        r#"
skip_first_row = false
on_invalid_date = "skip"
"#,
    );
    assert_eq!(config.on_invalid_date, InvalidDatePolicy::Skip);

    let input = table(&[
        "Broken,31/02/2021,,31/02/2021,,True,,,False",
        "Kept,28/02/2021,,28/02/2021,,True,,,False",
    ]);
    let calendar = convert(&input, &config, fixed_stamp()).unwrap();

    assert_eq!(calendar.len(), 1);
    assert_eq!(calendar.events()[0].summary, "Kept");
}

#[test]
fn config_custom_schema_and_delimiter() {
    let config = load(
        r#"
schema = ["Subject", "Start Date", "End Date"]
delimiter = ";"
skip_first_row = false
"#,
    );
    assert_eq!(config.schema, Schema::new(["Subject", "Start Date", "End Date"]));

    let input = "Subject;Start Date;End Date\r\nRelease;2021-06-01;2021-06-01\r\n";
    let calendar = convert(input, &config, fixed_stamp()).unwrap();

    let event = &calendar.events()[0];
    assert_eq!(event.summary, "Release");
    assert!(!event.all_day);
    assert_eq!(event.start.to_string(), "2021-06-01");
}

#[test]
fn config_prod_id_is_written() {
    let config = load(
        r#"
prod_id = "-//Example Corp//Events//EN"
skip_first_row = false
"#,
    );

    let input = table(&["A,01/05/2021,,01/05/2021,,True,,,False"]);
    let calendar = convert(&input, &config, fixed_stamp()).unwrap();
    let text = serialize(&calendar, &config.prod_id).unwrap();

    assert!(text.contains("PRODID:-//Example Corp//Events//EN\r\n"));
    assert_eq!(parse_events(&text)[0].get_summary(), Some("A"));
    assert!(parse_events(&text)[0].get_start().is_some());
}

#[test]
fn config_rejects_invalid_delimiter() {
    let config: Config = toml::from_str("delimiter = \"\\n\"").unwrap();
    assert!(config.validate().is_err());
}
