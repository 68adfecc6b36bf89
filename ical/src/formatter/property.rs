// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting for iCalendar properties.
//!
//! Each function writes one complete content line, CRLF included.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::formatter::value::{escape_text, write_date, write_date_time};
use crate::keyword::{
    KW_DATE, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_LOCATION, KW_PRODID,
    KW_SUMMARY, KW_UID, KW_VALUE, KW_VERSION,
};
use crate::value::{DateTime, ValueDateTime};

pub fn write_prop_prodid<W: Write>(f: &mut Formatter<W>, prod_id: &str) -> io::Result<()> {
    write_text_prop(f, KW_PRODID, prod_id)
}

pub fn write_prop_version<W: Write>(f: &mut Formatter<W>, version: &str) -> io::Result<()> {
    write!(f, "{KW_VERSION}:{version}")?;
    f.writeln()
}

pub fn write_prop_uid<W: Write>(f: &mut Formatter<W>, uid: &str) -> io::Result<()> {
    write_text_prop(f, KW_UID, uid)
}

pub fn write_prop_dtstamp<W: Write>(
    f: &mut Formatter<W>,
    dt_stamp: ValueDateTime,
) -> io::Result<()> {
    write!(f, "{KW_DTSTAMP}:")?;
    write_date_time(f, dt_stamp)?;
    f.writeln()
}

pub fn write_prop_dtstart<W: Write>(f: &mut Formatter<W>, dt_start: &DateTime) -> io::Result<()> {
    write_datetime_prop(f, KW_DTSTART, dt_start)
}

pub fn write_prop_dtend<W: Write>(f: &mut Formatter<W>, dt_end: &DateTime) -> io::Result<()> {
    write_datetime_prop(f, KW_DTEND, dt_end)
}

pub fn write_prop_summary<W: Write>(f: &mut Formatter<W>, summary: &str) -> io::Result<()> {
    write_text_prop(f, KW_SUMMARY, summary)
}

pub fn write_prop_description<W: Write>(
    f: &mut Formatter<W>,
    description: &str,
) -> io::Result<()> {
    write_text_prop(f, KW_DESCRIPTION, description)
}

pub fn write_prop_location<W: Write>(f: &mut Formatter<W>, location: &str) -> io::Result<()> {
    write_text_prop(f, KW_LOCATION, location)
}

/// Write: NAME:escaped-text
fn write_text_prop<W: Write>(f: &mut Formatter<W>, name: &str, content: &str) -> io::Result<()> {
    write!(f, "{name}:")?;
    // one write call, so escape pairs reach the folder intact
    f.write_all(escape_text(content).as_bytes())?;
    f.writeln()
}

/// Write: NAME[;VALUE=DATE]:value
fn write_datetime_prop<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    datetime: &DateTime,
) -> io::Result<()> {
    match datetime {
        DateTime::Date(date) => {
            write!(f, "{name};{KW_VALUE}={KW_DATE}:")?;
            write_date(f, *date)?;
        }
        DateTime::DateTime(dt) => {
            write!(f, "{name}:")?;
            write_date_time(f, *dt)?;
        }
    }
    f.writeln()
}
