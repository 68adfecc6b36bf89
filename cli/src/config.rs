// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fs, path::PathBuf, str::FromStr};

use csv2ics_core::{APP_NAME, Config as CoreConfig, Error};

const CSV2ICS_CONFIG_ENV: &str = "CSV2ICS_CONFIG";

/// Load the conversion configuration.
///
/// The file is taken from `path`, then the `CSV2ICS_CONFIG` environment
/// variable, then `config.toml` in the user config directory. Defaults apply
/// when none of them names a file.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Error> {
    let path = if let Some(path) = path {
        path
    } else if let Some(env_path) = std::env::var_os(CSV2ICS_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        match get_config_dir().map(|a| a.join(APP_NAME).join("config.toml")) {
            Some(config) if config.exists() => config,
            _ => {
                tracing::debug!("no config file found, using defaults");
                return Ok(CoreConfig::default());
            }
        }
    };

    let config = fs::read_to_string(&path)
        .map_err(|e| {
            Error::Config(format!(
                "failed to read config file at {}: {}",
                path.display(),
                e
            ))
        })?
        .parse::<ConfigRaw>()?
        .core;

    config.validate()?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir
}
