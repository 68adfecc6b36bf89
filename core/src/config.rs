// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::Error;
use crate::datetime::DateOrder;
use crate::schema::Schema;

/// The name of the application.
pub const APP_NAME: &str = "csv2ics";

/// What to do with a row whose dates cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidDatePolicy {
    /// Stop the run with [`Error::TemporalParse`].
    #[default]
    Abort,

    /// Log a warning and leave the row out of the calendar.
    Skip,
}

/// Configuration for the conversion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Columns the header must declare.
    pub schema: Schema,

    /// Field order for ambiguous numeric dates.
    pub date_order: DateOrder,

    /// Cell delimiter of the input table.
    pub delimiter: char,

    /// Drop the first data row without converting it.
    ///
    /// Defaults to true, which matches the behavior of earlier releases of
    /// the converter. Set to false to convert every row.
    pub skip_first_row: bool,

    /// Handling of rows with unresolvable dates.
    pub on_invalid_date: InvalidDatePolicy,

    /// `PRODID` of the generated calendar.
    pub prod_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: Schema::default(),
            date_order: DateOrder::default(),
            delimiter: ',',
            skip_first_row: true,
            on_invalid_date: InvalidDatePolicy::default(),
            prod_id: format!("-//{APP_NAME}//{APP_NAME} {}//EN", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Check values that deserialization alone cannot reject.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\r' | '\n') {
            return Err(Error::Config(format!(
                "delimiter must be a single ASCII character other than a quote or line break, got {:?}",
                self.delimiter
            )));
        }

        if self.schema.columns().is_empty() {
            return Err(Error::Config("schema must name at least one column".into()));
        }

        if self.prod_id.trim().is_empty() {
            return Err(Error::Config("prod_id must not be empty".into()));
        }

        Ok(())
    }

    /// The delimiter as a byte, after [`Config::validate`] has passed.
    pub(crate) fn delimiter_byte(&self) -> Result<u8, Error> {
        u8::try_from(self.delimiter)
            .map_err(|_| Error::Config(format!("invalid delimiter {:?}", self.delimiter)))
    }
}
