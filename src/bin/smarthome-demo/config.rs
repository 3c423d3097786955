// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Demo configuration: optional `smarthome.toml` with environment overrides.

use std::path::Path;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Names of the demo devices.
    pub devices: DevicesConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Names given to the demo devices.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DevicesConfig {
    /// Name of the light.
    pub light: String,
    /// Name of the fan.
    pub fan: String,
    /// Name of the air conditioning unit.
    pub conditioner: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `smarthome.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed, or if a device
    /// name ends up empty.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("smarthome.toml", |key| std::env::var(key).ok())
    }

    /// Load configuration from `path`, resolving overrides through `env`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(
        path: impl AsRef<Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    // RUST_LOG is applied last so it wins over SMARTHOME_LOG.
    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(val) = env("SMARTHOME_LIGHT_NAME") {
            self.devices.light = val;
        }
        if let Some(val) = env("SMARTHOME_FAN_NAME") {
            self.devices.fan = val;
        }
        if let Some(val) = env("SMARTHOME_AC_NAME") {
            self.devices.conditioner = val;
        }
        if let Some(val) = env("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = env("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, name) in [
            ("light", &self.devices.light),
            ("fan", &self.devices.fan),
            ("conditioner", &self.devices.conditioner),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "devices.{key} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            light: "Living Room Light".to_string(),
            fan: "Bedroom Fan".to_string(),
            conditioner: "Office AC".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthome_lib=warn".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
