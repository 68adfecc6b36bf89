// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use csv2ics_ical::{DateTime, ICalendar, VEvent, ValueDateTime, formatter};
use jiff::civil::Date;
use uuid::Uuid;

use crate::Error;
use crate::calendar::Calendar;
use crate::datetime::LooseDateTime;
use crate::event::Event;

const UID_DOMAIN: &str = "csv2ics";

/// Build the iCalendar model of a calendar.
pub fn to_icalendar(calendar: &Calendar, prod_id: &str) -> ICalendar {
    let dt_stamp = ValueDateTime::from(calendar.stamp());
    let mut ical = ICalendar::new(prod_id);
    ical.events = calendar
        .events()
        .iter()
        .enumerate()
        .map(|(i, event)| to_vevent(i, event, dt_stamp))
        .collect();
    ical
}

/// Render a calendar as RFC 5545 text.
pub fn serialize(calendar: &Calendar, prod_id: &str) -> Result<String, Error> {
    formatter::format(&to_icalendar(calendar, prod_id)).map_err(Error::Format)
}

fn to_vevent(index: usize, event: &Event, dt_stamp: ValueDateTime) -> VEvent {
    let (dt_start, dt_end) = event_bounds(event);
    VEvent {
        uid: uid(index, event),
        dt_stamp,
        dt_start,
        dt_end,
        summary: Some(event.summary.clone()),
        description: non_empty(&event.description),
        location: non_empty(&event.location),
    }
}

/// `DTSTART` and `DTEND` of an event.
///
/// `DTEND` is left out when it would not be later than `DTSTART`.
fn event_bounds(event: &Event) -> (DateTime, Option<DateTime>) {
    use LooseDateTime::{DateOnly, Floating};

    let (start, end) = match (event.start, event.end) {
        // DATE end is exclusive, so the last covered day is pushed forward by one.
        (start, end) if event.all_day => {
            (DateOnly(start.date()), DateOnly(next_day(end.date())))
        }
        (DateOnly(start), DateOnly(end)) => (DateOnly(start), DateOnly(next_day(end))),
        (start, end) => (
            Floating(start.with_start_of_day()),
            Floating(end.with_start_of_day()),
        ),
    };

    if end <= start {
        tracing::warn!(
            summary = %event.summary,
            start = %event.start,
            end = %event.end,
            "event ends before it starts, DTEND omitted"
        );
        return (start.into(), None);
    }
    (start.into(), Some(end.into()))
}

fn next_day(date: Date) -> Date {
    date.tomorrow().unwrap_or(date)
}

fn uid(index: usize, event: &Event) -> String {
    let name = format!("{index}\u{1f}{}\u{1f}{}", event.summary, event.start);
    let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes());
    format!("{id}@{UID_DOMAIN}")
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
