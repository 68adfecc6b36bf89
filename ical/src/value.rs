// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property value types as defined in RFC 5545 Section 3.3.

/// Date value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValueDate {
    /// Year component.
    pub year: i16,

    /// Month component, 1-12.
    pub month: i8,

    /// Day component, 1-31.
    pub day: i8,
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Date> for ValueDate {
    fn from(value: jiff::civil::Date) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

/// Time value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValueTime {
    /// Hour component, 0-23.
    pub hour: i8,

    /// Minute component, 0-59.
    pub minute: i8,

    /// Second component, 0-60 (60 only for a leap second).
    pub second: i8,

    /// Whether the time is in UTC, written with a trailing `Z`.
    pub utc: bool,
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Time> for ValueTime {
    fn from(value: jiff::civil::Time) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
            utc: false,
        }
    }
}

/// Date with time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValueDateTime {
    /// Date part.
    pub date: ValueDate,

    /// Time part.
    pub time: ValueTime,
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::DateTime> for ValueDateTime {
    fn from(value: jiff::civil::DateTime) -> Self {
        Self {
            date: value.date().into(),
            time: value.time().into(),
        }
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::Timestamp> for ValueDateTime {
    /// Converts an instant into its UTC form, e.g. for `DTSTAMP`.
    fn from(value: jiff::Timestamp) -> Self {
        let dt = jiff::tz::TimeZone::UTC.to_datetime(value);
        Self {
            date: dt.date().into(),
            time: ValueTime {
                utc: true,
                ..dt.time().into()
            },
        }
    }
}

/// The value of a date-time property such as `DTSTART` or `DTEND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTime {
    /// Date only, written with `VALUE=DATE`.
    Date(ValueDate),

    /// Floating date-time without time zone, or UTC when the time is marked so.
    DateTime(ValueDateTime),
}

impl From<ValueDate> for DateTime {
    fn from(value: ValueDate) -> Self {
        DateTime::Date(value)
    }
}

impl From<ValueDateTime> for DateTime {
    fn from(value: ValueDateTime) -> Self {
        DateTime::DateTime(value)
    }
}
