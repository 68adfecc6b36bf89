// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar object and event component (RFC 5545 Sections 3.4 and 3.6.1).

use crate::keyword::KW_VERSION_2_0;
use crate::value::{DateTime, ValueDateTime};

/// Main iCalendar object (VCALENDAR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    /// Product identifier that generated the iCalendar data
    pub prod_id: String,

    /// Version of iCalendar specification
    pub version: String,

    /// Event components, in output order
    pub events: Vec<VEvent>,
}

impl ICalendar {
    /// Create an empty version 2.0 calendar.
    pub fn new(prod_id: impl Into<String>) -> Self {
        Self {
            prod_id: prod_id.into(),
            version: KW_VERSION_2_0.to_string(),
            events: Vec::new(),
        }
    }
}

/// Event component (VEVENT)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvent {
    /// Unique identifier for the event
    pub uid: String,

    /// Date/time the event instance was created, in UTC
    pub dt_stamp: ValueDateTime,

    /// Date/time the event starts
    pub dt_start: DateTime,

    /// Date/time the event ends (exclusive)
    pub dt_end: Option<DateTime>,

    /// Summary/title of the event
    pub summary: Option<String>,

    /// Description of the event
    pub description: Option<String>,

    /// Location of the event
    pub location: Option<String>,
}
