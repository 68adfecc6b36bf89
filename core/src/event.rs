// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::Error;
use crate::datetime::{LooseDateTime, TemporalResolver};
use crate::schema::{
    COL_ALL_DAY_EVENT, COL_DESCRIPTION, COL_END_DATE, COL_END_TIME, COL_LOCATION, COL_PRIVATE,
    COL_START_DATE, COL_START_TIME, COL_SUBJECT,
};

const FLAG_VALID_TRUE: &[&str] = &["true", "yes", "1"];
const FLAG_VALID_FALSE: &[&str] = &["false", "no", "0", ""];

/// One data row of the input table, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Raw cell text, empty if the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map_or("", String::as_str)
    }

    /// True if no cell holds anything but whitespace.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|a| a.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A calendar event built from one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The summary of the event, taken verbatim.
    pub summary: String,

    /// The start date and time of the event.
    pub start: LooseDateTime,

    /// The end date and time of the event. Not checked against `start`.
    pub end: LooseDateTime,

    /// Whether the source marks the event as lasting whole days.
    pub all_day: bool,

    /// The description of the event, trimmed.
    pub description: String,

    /// The location of the event, trimmed.
    pub location: String,

    /// Whether the source marks the event as private. Not written to the output.
    pub private: bool,
}

/// Maps validated rows to events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBuilder {
    resolver: TemporalResolver,
}

impl EventBuilder {
    pub const fn new(resolver: TemporalResolver) -> Self {
        Self { resolver }
    }

    pub fn build(&self, row: &Row) -> Result<Event, Error> {
        let start = self
            .resolver
            .resolve(row.get(COL_START_DATE), row.get(COL_START_TIME))?;
        let end = self
            .resolver
            .resolve(row.get(COL_END_DATE), row.get(COL_END_TIME))?;

        Ok(Event {
            summary: row.get(COL_SUBJECT).to_string(),
            start,
            end,
            all_day: parse_flag(COL_ALL_DAY_EVENT, row.get(COL_ALL_DAY_EVENT))?,
            description: row.get(COL_DESCRIPTION).trim().to_string(),
            location: row.get(COL_LOCATION).trim().to_string(),
            private: parse_flag(COL_PRIVATE, row.get(COL_PRIVATE))?,
        })
    }
}

/// Normalize flag text: `true`/`yes`/`1` or `false`/`no`/`0`/empty, case-insensitive.
pub fn parse_flag(column: &str, value: &str) -> Result<bool, Error> {
    let lower = value.trim().to_lowercase();
    if FLAG_VALID_TRUE.contains(&lower.as_str()) {
        Ok(true)
    } else if FLAG_VALID_FALSE.contains(&lower.as_str()) {
        Ok(false)
    } else {
        Err(Error::Flag {
            column: column.to_string(),
            value: value.trim().to_string(),
        })
    }
}
