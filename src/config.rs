//! Configuration file for the command-line tool
//!
//! ```json
//! { "Unit": "milliseconds", "Prefix": "Ran for ", "Quiet": false }
//! ```

use std::fs;
use std::io::{self, Error, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::units::DurationUnit;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "stopwatch.json";

const DEFAULT_PREFIX: &str = "Elapsed: ";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StopwatchConfig {
    #[serde(rename = "Unit", default = "default_unit", deserialize_with = "validate_unit")]
    pub unit: DurationUnit,
    #[serde(rename = "Prefix", default = "default_prefix")]
    pub prefix: String,
    #[serde(rename = "Quiet", default)]
    pub quiet: bool,
}

fn default_unit() -> DurationUnit {
    DurationUnit::Milliseconds
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn validate_unit<'de, D>(deserializer: D) -> Result<DurationUnit, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("Unit must be one of nanoseconds, microseconds, milliseconds, seconds, minutes (got {:?})", value)))
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            prefix: default_prefix(),
            quiet: false,
        }
    }
}

impl StopwatchConfig {
    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults
    pub fn resolve(path: Option<&Path>) -> io::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}
