// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use csv2ics_ical::{DateTime as IcalDateTime, ValueDate};
use jiff::civil::{Date, DateTime, Time};

/// A date and time that may be in different formats, such as date only or floating time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LooseDateTime {
    /// Date only without time.
    DateOnly(Date),

    /// Floating date and time without timezone.
    Floating(DateTime),
}

impl LooseDateTime {
    /// Returns the date part
    pub fn date(&self) -> Date {
        match self {
            LooseDateTime::DateOnly(d) => *d,
            LooseDateTime::Floating(dt) => dt.date(),
        }
    }

    /// Returns the time part, if available.
    pub fn time(&self) -> Option<Time> {
        match self {
            LooseDateTime::DateOnly(_) => None,
            LooseDateTime::Floating(dt) => Some(dt.time()),
        }
    }

    /// Converts to a datetime with default start time (00:00:00) if time is missing.
    pub fn with_start_of_day(&self) -> DateTime {
        self.date().to_datetime(self.time().unwrap_or_else(Time::midnight))
    }
}

impl fmt::Display for LooseDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseDateTime::DateOnly(d) => write!(f, "{d}"),
            LooseDateTime::Floating(dt) => write!(f, "{}", dt.strftime("%Y-%m-%dT%H:%M")),
        }
    }
}

impl From<Date> for LooseDateTime {
    fn from(d: Date) -> Self {
        LooseDateTime::DateOnly(d)
    }
}

impl From<DateTime> for LooseDateTime {
    fn from(dt: DateTime) -> Self {
        LooseDateTime::Floating(dt)
    }
}

impl From<LooseDateTime> for IcalDateTime {
    fn from(value: LooseDateTime) -> Self {
        match value {
            LooseDateTime::DateOnly(d) => IcalDateTime::Date(ValueDate::from(d)),
            LooseDateTime::Floating(dt) => IcalDateTime::DateTime(dt.into()),
        }
    }
}
