// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting for iCalendar components.
//!
//! This module formats the calendar object and its event components as
//! defined in RFC 5545 Sections 3.4 and 3.6.1.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::formatter::property::{
    write_prop_description, write_prop_dtend, write_prop_dtstamp, write_prop_dtstart,
    write_prop_location, write_prop_prodid, write_prop_summary, write_prop_uid,
    write_prop_version,
};
use crate::keyword::{KW_BEGIN, KW_END, KW_VCALENDAR, KW_VEVENT};
use crate::semantic::{ICalendar, VEvent};

/// Format an `ICalendar` component.
pub fn write_icalendar<W: Write>(f: &mut Formatter<W>, calendar: &ICalendar) -> io::Result<()> {
    with_block(f, KW_VCALENDAR, |f| {
        // Required properties
        write_prop_prodid(f, &calendar.prod_id)?;
        write_prop_version(f, &calendar.version)?;

        for event in &calendar.events {
            write_vevent(f, event)?;
        }

        Ok(())
    })
}

/// Format a `VEvent` component.
fn write_vevent<W: Write>(f: &mut Formatter<W>, event: &VEvent) -> io::Result<()> {
    with_block(f, KW_VEVENT, |f| {
        // Required properties
        write_prop_uid(f, &event.uid)?;
        write_prop_dtstamp(f, event.dt_stamp)?;
        write_prop_dtstart(f, &event.dt_start)?;

        // Optional properties
        if let Some(dt_end) = &event.dt_end {
            write_prop_dtend(f, dt_end)?;
        }
        if let Some(summary) = &event.summary {
            write_prop_summary(f, summary)?;
        }
        if let Some(description) = &event.description {
            write_prop_description(f, description)?;
        }
        if let Some(location) = &event.location {
            write_prop_location(f, location)?;
        }

        Ok(())
    })
}

fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> io::Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> io::Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;

    write_content(f)?;

    write!(f, "{KW_END}:{name}")?;
    f.writeln()
}
