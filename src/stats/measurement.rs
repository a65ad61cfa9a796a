//! Measurement record for a single timed invocation
//!
//! A measurement is produced once, when the timed work returns, and is never
//! changed afterwards.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::units::DurationUnit;

/// Elapsed time of one invocation, expressed in a single unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurement {
    elapsed: u64,
    unit: DurationUnit,
}

impl Measurement {
    /// Convert a raw duration into `unit`
    pub fn from_duration(duration: Duration, unit: DurationUnit) -> Self {
        Self {
            elapsed: unit.convert(duration),
            unit,
        }
    }

    /// Elapsed count in [`Measurement::unit`]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    pub fn label(&self) -> &'static str {
        self.unit.label()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.elapsed, self.label())
    }
}
