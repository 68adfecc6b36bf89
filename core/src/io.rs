// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Write;
use std::path::Path;

use jiff::Timestamp;
use tempfile::NamedTempFile;

use crate::Error;
use crate::calendar::convert;
use crate::config::Config;
use crate::serialize::serialize;

/// Convert the table at `input` and write the calendar to `output`.
///
/// Nothing is written unless the whole table converts; the destination is
/// replaced in one rename. Returns the number of events written.
#[tracing::instrument(skip(config))]
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &Config,
    stamp: Timestamp,
) -> Result<usize, Error> {
    let text = read_table(input)?;
    let calendar = convert(&text, config, stamp)?;
    let document = serialize(&calendar, &config.prod_id)?;
    write_ics(output, &document)?;

    tracing::debug!(count = calendar.len(), "calendar written");
    Ok(calendar.len())
}

/// Read the whole input table as UTF-8 text.
pub fn read_table(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `content` to `path` through a sibling temporary file.
pub fn write_ics(path: &Path, content: &str) -> Result<(), Error> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;
    file.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
