//! Logging settings, read from the environment (and a `.env` file if any)

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

use crate::consts::{LOG_FILE, LOG_FILE_VAR, LOG_LEVEL, LOG_LEVEL_VAR};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level {value:?} in {var}")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub file: PathBuf,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(LOG_FILE),
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    /// Loads `.env`, then reads the overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the settings from a variable lookup, falling back to the
    /// defaults for missing variables
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = lookup(LOG_FILE_VAR).unwrap_or_else(|| LOG_FILE.to_owned());
        let level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| LOG_LEVEL.to_owned());

        let level = LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::InvalidLogLevel {
            var: LOG_LEVEL_VAR,
            value: level.clone(),
        })?;

        Ok(Self {
            file: PathBuf::from(file),
            level,
        })
    }
}
