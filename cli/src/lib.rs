// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of csv2ics.

mod cli;
mod config;

pub use crate::cli::{Cli, run};
pub use crate::config::parse_config;
