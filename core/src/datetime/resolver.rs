// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use jiff::civil::{Date, Time};
use regex::{Captures, Regex};

use crate::Error;
use crate::datetime::LooseDateTime;

/// Formats tried once the text starts with a four-digit year.
const ISO_FORMATS: [&str; 3] = ["%Y %m %d", "%Y %b %d", "%Y %B %d"];

/// Formats with a month name; two-digit years are tried first so that `%Y`
/// never reads `21` as the year 21.
const MONTH_NAME_FORMATS: [&str; 8] = [
    "%d %b %y", "%d %b %Y", "%d %B %y", "%d %B %Y", "%b %d %y", "%b %d %Y", "%B %d %y", "%B %d %Y",
];

/// Field order used for all-numeric dates such as `03/04/2021`.
///
/// A leading four-digit field always means year-month-day, whatever the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// Day, month, year.
    #[default]
    Dmy,

    /// Month, day, year.
    Mdy,

    /// Year, month, day.
    Ymd,
}

impl DateOrder {
    const fn numeric_formats(self) -> [&'static str; 2] {
        match self {
            DateOrder::Dmy => ["%d %m %y", "%d %m %Y"],
            DateOrder::Mdy => ["%m %d %y", "%m %d %Y"],
            DateOrder::Ymd => ["%y %m %d", "%Y %m %d"],
        }
    }
}

/// Combines free-form date and time text into a point in time.
///
/// Resolution depends only on the input text and the date order; the wall
/// clock is never consulted, so dates without a year are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalResolver {
    order: DateOrder,
}

impl TemporalResolver {
    pub const fn new(order: DateOrder) -> Self {
        Self { order }
    }

    /// Resolve a date and an optional time of day.
    ///
    /// An empty `time` yields [`LooseDateTime::DateOnly`], unless the date text
    /// itself ends with a time such as `01/05/2021 09:00`.
    pub fn resolve(&self, date: &str, time: &str) -> Result<LooseDateTime, Error> {
        let error = || Error::TemporalParse {
            text: format!("{date} {time}").trim().to_string(),
        };

        let (date, time) = match (date.trim(), time.trim()) {
            (d, "") => match self.parse_date(d) {
                Some(date) => return Ok(LooseDateTime::DateOnly(date)),
                None => split_embedded_time(d).ok_or_else(error)?,
            },
            (d, t) => (d, t),
        };

        let date = self.parse_date(date).ok_or_else(error)?;
        let time = parse_time(time).ok_or_else(error)?;
        Ok(LooseDateTime::Floating(date.to_datetime(time)))
    }

    fn parse_date(&self, text: &str) -> Option<Date> {
        const LEADING_YEAR: &str = r"^\d{4}\b";
        static REGEX: OnceLock<Option<Regex>> = OnceLock::new();

        let text = normalize_date(text)?;
        let formats = if regex(&REGEX, LEADING_YEAR)?.is_match(&text) {
            ISO_FORMATS.to_vec()
        } else {
            [&self.order.numeric_formats()[..], &MONTH_NAME_FORMATS[..]].concat()
        };

        formats
            .iter()
            .find_map(|fmt| Date::strptime(fmt, &text).ok())
    }
}

/// Rewrite date text into the space-separated form the formats expect.
///
/// A leading weekday and ordinal suffixes are dropped, `/`, `-`, `.` and `,`
/// become single spaces, compact `YYYYMMDD` is split and month names are
/// title-cased.
fn normalize_date(text: &str) -> Option<String> {
    const WEEKDAY: &str = r"(?i)^(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues?|wed|thu(?:rs?)?|fri|sat|sun)\.?[\s,]+";
    const ORDINAL: &str = r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b";
    const SEPARATOR: &str = r"[\s,/.\-]+";
    const COMPACT: &str = r"^(\d{4})(\d{2})(\d{2})$";
    const WORD: &str = r"[A-Za-z]+";
    static WEEKDAY_RE: OnceLock<Option<Regex>> = OnceLock::new();
    static ORDINAL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    static SEPARATOR_RE: OnceLock<Option<Regex>> = OnceLock::new();
    static COMPACT_RE: OnceLock<Option<Regex>> = OnceLock::new();
    static WORD_RE: OnceLock<Option<Regex>> = OnceLock::new();

    let text = regex(&WEEKDAY_RE, WEEKDAY)?.replace(text.trim(), "");
    let text = regex(&ORDINAL_RE, ORDINAL)?.replace_all(&text, "$1");
    let text = regex(&SEPARATOR_RE, SEPARATOR)?.replace_all(&text, " ");
    let text = regex(&COMPACT_RE, COMPACT)?.replace(text.trim(), "$1 $2 $3");
    let text = regex(&WORD_RE, WORD)?.replace_all(&text, |caps: &Captures| month_case(&caps[0]));
    Some(text.into_owned())
}

/// `april` and `APRIL` become `April`; `sept` becomes `Sep`.
fn month_case(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    if lower == "sept" {
        return "Sep".to_string();
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => lower,
    }
}

/// Parse `HH:MM`, `HH:MM:SS` or `H`, optionally followed by `am`/`pm`.
/// `.` is accepted in place of `:`.
fn parse_time(text: &str) -> Option<Time> {
    const MERIDIEM: &str = r"(?i)^(.*?)\s*([ap])\.?m\.?$";
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();

    let text = text.trim();
    let (body, meridiem) = match regex(&REGEX, MERIDIEM)?.captures(text) {
        Some(caps) => (caps.get(1)?.as_str(), Some(caps[2].to_ascii_uppercase())),
        None => (text, None),
    };

    let mut body = body.replace('.', ":");
    if !body.contains(':') {
        body.push_str(":00");
    }

    let (formats, text) = match meridiem {
        Some(m) => (["%I:%M:%S %p", "%I:%M %p"], format!("{body} {m}M")),
        None => (["%H:%M:%S", "%H:%M"], body),
    };
    formats
        .iter()
        .find_map(|fmt| Time::strptime(fmt, &text).ok())
}

/// Split `01/05/2021 09:00` or `2021-05-01T09:00` into date and time text.
fn split_embedded_time(text: &str) -> Option<(&str, &str)> {
    const RE: &str = r"(?i)^(.+?)(?:\s+|t)(\d{1,2}[:.]\d{2}(?:[:.]\d{2})?(?:\s*[ap]\.?m\.?)?)$";
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();

    let caps = regex(&REGEX, RE)?.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Compile a pattern once; `None` if it does not compile.
fn regex(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}
