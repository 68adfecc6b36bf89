// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use jiff::Timestamp;

use crate::Error;
use crate::config::{Config, InvalidDatePolicy};
use crate::datetime::TemporalResolver;
use crate::event::{Event, EventBuilder, Row};
use crate::schema::SchemaValidator;

const BOM: char = '\u{feff}';

/// Ordered collection of events, in input row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    events: Vec<Event>,
    stamp: Timestamp,
}

impl Calendar {
    /// Create an empty calendar whose events are stamped with `stamp`.
    pub fn new(stamp: Timestamp) -> Self {
        Self {
            events: Vec::new(),
            stamp,
        }
    }

    /// Append an event. Nothing is merged, sorted or deduplicated.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Creation time written as `DTSTAMP` of every event.
    pub fn stamp(&self) -> Timestamp {
        self.stamp
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Convert a delimited table of events into a calendar.
///
/// The header is checked against `config.schema` before any row is read.
/// Rows are then built one by one; the first fatal error stops the run.
pub fn convert(input: &str, config: &Config, stamp: Timestamp) -> Result<Calendar, Error> {
    config.validate()?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, a)| match i {
            0 => a.trim_start_matches(BOM).to_string(),
            _ => a.to_string(),
        })
        .collect();

    SchemaValidator::new(&config.schema).validate(&header)?;

    // Only schema columns feed a row; duplicate names resolve to the first occurrence.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (i, name) in header.iter().enumerate() {
        if config.schema.contains(name) {
            positions.entry(name.as_str()).or_insert(i);
        }
    }

    let builder = EventBuilder::new(TemporalResolver::new(config.date_order));
    let mut calendar = Calendar::new(stamp);
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row_number = i + 1;
        let row: Row = positions
            .iter()
            .map(|(name, pos)| (*name, record.get(*pos).unwrap_or_default()))
            .collect();

        if row.is_blank() {
            return Err(Error::RowFormat { row: row_number });
        }

        if i == 0 && config.skip_first_row {
            tracing::debug!(row = row_number, "skipping first data row");
            continue;
        }

        match builder.build(&row) {
            Ok(event) => calendar.push(event),
            Err(Error::TemporalParse { text })
                if config.on_invalid_date == InvalidDatePolicy::Skip =>
            {
                tracing::warn!(row = row_number, text = %text, "unresolvable date, row skipped");
            }
            Err(e) => {
                tracing::debug!(row = row_number, err = %e, "failed to build event");
                return Err(e);
            }
        }
    }

    tracing::debug!(count = calendar.len(), "events assembled");
    Ok(calendar)
}
