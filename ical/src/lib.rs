// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Represent and write iCalendar (RFC 5545) calendars and events.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

pub mod formatter;
mod keyword;
pub mod semantic;
pub mod value;

pub use crate::semantic::{ICalendar, VEvent};
pub use crate::value::{DateTime, ValueDate, ValueDateTime, ValueTime};
