// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion of tabular event exports into iCalendar documents.

mod calendar;
mod config;
mod datetime;
mod error;
mod event;
mod io;
mod schema;
mod serialize;

pub use crate::calendar::{Calendar, convert};
pub use crate::config::{APP_NAME, Config, InvalidDatePolicy};
pub use crate::datetime::{DateOrder, LooseDateTime, TemporalResolver};
pub use crate::error::Error;
pub use crate::event::{Event, EventBuilder, Row, parse_flag};
pub use crate::io::{convert_file, read_table, write_ics};
pub use crate::schema::{REQUIRED_COLUMNS, Schema, SchemaReport, SchemaValidator};
pub use crate::serialize::{serialize, to_icalendar};
