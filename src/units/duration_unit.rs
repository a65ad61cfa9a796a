//! Duration unit definitions for the timing system

use std::fmt;
use std::io::{self, Error, ErrorKind};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

/// Granularity a measurement is reported in, ordered from finest to coarsest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
}

impl DurationUnit {
    /// Get all supported units
    pub fn all() -> &'static [DurationUnit] {
        &[
            DurationUnit::Nanoseconds,
            DurationUnit::Microseconds,
            DurationUnit::Milliseconds,
            DurationUnit::Seconds,
            DurationUnit::Minutes,
        ]
    }

    /// Plural label used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            DurationUnit::Nanoseconds => "nanoseconds",
            DurationUnit::Microseconds => "microseconds",
            DurationUnit::Milliseconds => "milliseconds",
            DurationUnit::Seconds => "seconds",
            DurationUnit::Minutes => "minutes",
        }
    }

    /// Short symbol accepted on the command line and in config files
    pub fn symbol(&self) -> &'static str {
        match self {
            DurationUnit::Nanoseconds => "ns",
            DurationUnit::Microseconds => "us",
            DurationUnit::Milliseconds => "ms",
            DurationUnit::Seconds => "s",
            DurationUnit::Minutes => "min",
        }
    }

    /// Number of nanosecond ticks in one unit
    pub const fn nanos_per_unit(&self) -> u128 {
        match self {
            DurationUnit::Nanoseconds => 1,
            DurationUnit::Microseconds => 1_000,
            DurationUnit::Milliseconds => 1_000_000,
            DurationUnit::Seconds => 1_000_000_000,
            DurationUnit::Minutes => 60_000_000_000,
        }
    }

    /// Whole units contained in `duration`, truncated. Saturates at `u64::MAX`.
    pub fn convert(&self, duration: Duration) -> u64 {
        let count = duration.as_nanos() / self.nanos_per_unit();
        u64::try_from(count).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DurationUnit {
    type Err = io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        DurationUnit::all()
            .iter()
            .copied()
            .find(|unit| {
                needle == unit.label()
                    || needle == unit.symbol()
                    || (*unit == DurationUnit::Microseconds && needle == "µs")
            })
            .ok_or_else(|| Error::new(ErrorKind::InvalidInput, format!("Unknown duration unit: {:?}", s)))
    }
}

impl<'de> Deserialize<'de> for DurationUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
