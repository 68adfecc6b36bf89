// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory holding one input table and one output path.
///
/// Removed with everything in it when dropped.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: TempDir,
    /// Path of the input table.
    pub input: PathBuf,
    /// Path the calendar is written to.
    pub output: PathBuf,
}

impl TempWorkspace {
    /// Creates a workspace whose input table holds `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the input file cannot be created.
    pub fn with_table(table: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("events.csv");
        let output = dir.path().join("events.ics");
        fs::write(&input, table)?;
        Ok(Self { dir, input, output })
    }

    /// Number of entries in the workspace directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn entry_count(&self) -> Result<usize, Box<dyn std::error::Error>> {
        Ok(fs::read_dir(self.dir.path())?.count())
    }
}
