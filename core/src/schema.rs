// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::Error;

pub const COL_SUBJECT: &str = "Subject";
pub const COL_START_DATE: &str = "Start Date";
pub const COL_END_DATE: &str = "End Date";
pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_ALL_DAY_EVENT: &str = "All Day Event";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_LOCATION: &str = "Location";
pub const COL_PRIVATE: &str = "Private";

/// Columns of the Google Calendar CSV import layout.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_SUBJECT,
    COL_START_DATE,
    COL_END_DATE,
    COL_START_TIME,
    COL_END_TIME,
    COL_ALL_DAY_EVENT,
    COL_DESCRIPTION,
    COL_LOCATION,
    COL_PRIVATE,
];

/// The set of columns a table header must declare. Names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct Schema(Vec<String>);

impl Schema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|a| a == column)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(REQUIRED_COLUMNS.iter().copied())
    }
}

/// Outcome of a successful header check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Declared columns that are not part of the schema, in header order.
    pub unexpected: Vec<String>,
}

/// Gatekeeper run on the header before any row is read.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Check the declared header against the schema.
    ///
    /// Unexpected columns are logged and reported but do not fail the check;
    /// absent schema columns do.
    pub fn validate<S: AsRef<str>>(&self, header: &[S]) -> Result<SchemaReport, Error> {
        let mut report = SchemaReport::default();
        for column in header.iter().map(AsRef::as_ref) {
            if !self.schema.contains(column) && !report.unexpected.iter().any(|a| a == column) {
                tracing::warn!(column, "column is ignored");
                report.unexpected.push(column.to_string());
            }
        }

        let missing: Vec<String> = self
            .schema
            .columns()
            .iter()
            .filter(|required| !header.iter().any(|a| a.as_ref() == required.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(report)
        } else {
            Err(Error::Schema { missing })
        }
    }
}
