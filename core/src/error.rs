// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

/// Errors raised while converting a table of events into a calendar.
///
/// Every variant is fatal to the run, except `TemporalParse` under
/// [`InvalidDatePolicy::Skip`](crate::InvalidDatePolicy::Skip).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required columns are absent from the header.
    #[error("missing column(s): {}", quoted(.missing))]
    Schema {
        /// Missing column names, in schema order.
        missing: Vec<String>,
    },

    /// A data row has no populated field.
    #[error("row {row} has no populated fields, expected at least Subject and Start Date")]
    RowFormat {
        /// 1-based data row number (the header is not counted).
        row: usize,
    },

    /// A date/time combination cannot be resolved to a calendar date.
    #[error("cannot resolve '{text}' to a date")]
    TemporalParse {
        /// The offending date and time text.
        text: String,
    },

    /// A flag column holds text that is not a recognized boolean.
    #[error("unrecognized value '{value}' for column '{column}', expected true or false")]
    Flag {
        /// Column name.
        column: String,
        /// Offending cell text.
        value: String,
    },

    /// Malformed delimited text.
    #[error("failed to read table: {0}")]
    Csv(#[from] csv::Error),

    /// Reading the input or writing the output failed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Rendering the calendar document failed.
    #[error("failed to format calendar: {0}")]
    Format(#[source] io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
