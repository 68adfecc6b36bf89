// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use csv2ics_core::{APP_NAME, Config, convert_file};
use jiff::Timestamp;
use tracing_subscriber::EnvFilter;

use crate::config::parse_config;

const SOURCE_DATE_EPOCH_ENV: &str = "SOURCE_DATE_EPOCH";

/// Run the csv2ics command-line interface.
pub fn run() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not failures.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            if let Err(err) = e.print() {
                tracing::error!(err = %err, "failed to print usage");
            }
            return code;
        }
    };

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    /// Path to the input table
    pub input: PathBuf,

    /// Path of the calendar to write
    pub output: PathBuf,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Convert a CSV table of events into an iCalendar (.ics) file.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                arg!(<INPUT> "Path to the CSV table of events")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(<OUTPUT> "Path of the iCalendar file to write")
                    .long_help(
                        "\
Path of the iCalendar file to write. An existing file is replaced only after \
the whole table has been converted.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from(&matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        let path = |id: &str| {
            matches
                .get_one::<PathBuf>(id)
                .cloned()
                .unwrap_or_default()
        };
        Self {
            input: path("INPUT"),
            output: path("OUTPUT"),
        }
    }

    /// Load the configuration and convert the input table.
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(None)?;
        let stamp = creation_stamp(std::env::var(SOURCE_DATE_EPOCH_ENV).ok().as_deref())?;
        self.run_with(&config, stamp)?;
        Ok(())
    }

    /// Convert the input table with the given configuration and `DTSTAMP`.
    pub fn run_with(&self, config: &Config, stamp: Timestamp) -> Result<usize, Box<dyn Error>> {
        let count = convert_file(&self.input, &self.output, config, stamp)?;
        tracing::info!(count, output = %self.output.display(), "calendar written");
        Ok(count)
    }
}

/// `DTSTAMP` of the run: `SOURCE_DATE_EPOCH` seconds when given, else now.
fn creation_stamp(source_date_epoch: Option<&str>) -> Result<Timestamp, Box<dyn Error>> {
    match source_date_epoch.map(str::trim) {
        Some(secs) if !secs.is_empty() => {
            let secs: i64 = secs
                .parse()
                .map_err(|e| format!("Invalid {SOURCE_DATE_EPOCH_ENV} '{secs}': {e}"))?;
            Ok(Timestamp::from_second(secs)?)
        }
        _ => Ok(Timestamp::now()),
    }
}
