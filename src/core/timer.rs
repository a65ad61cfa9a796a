//! The timing wrapper
//!
//! A [`Timer`] runs a piece of work exactly once on the calling thread,
//! samples a monotonic clock on either side of it and keeps the result as a
//! [`Measurement`] in the unit `U`. The constructor picks the reporting mode:
//!
//! | constructor                   | report                         |
//! |-------------------------------|--------------------------------|
//! | [`Timer::new`]                | none, use the accessors        |
//! | [`Timer::with_message`]       | sentence on stdout             |
//! | [`Timer::with_message_to`]    | sentence on a caller's sink    |
//! | [`Timer::with_handler`]       | `handler(count, label)`        |
//!
//! Panics raised by the work unwind straight through the constructor. The
//! `try_*` constructors take work returning `Result<(), E>` and hand an `Err`
//! back unchanged, without measuring or reporting anything.

use std::convert::Infallible;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::time::Instant;

use tracing::{debug, trace};

use crate::core::report::Report;
use crate::stats::Measurement;
use crate::units::{DurationUnit, Milliseconds, Unit};

/// Time `work` and express the result in `unit`
pub fn measure<F>(unit: DurationUnit, work: F) -> Measurement
where
    F: FnOnce(),
{
    let outcome = try_measure(unit, || {
        work();
        Ok::<(), Infallible>(())
    });
    match outcome {
        Ok(measurement) => measurement,
        Err(never) => match never {},
    }
}

/// Time fallible `work`. An `Err` is returned as is and nothing is measured.
pub fn try_measure<F, E>(unit: DurationUnit, work: F) -> Result<Measurement, E>
where
    F: FnOnce() -> Result<(), E>,
{
    trace!(unit = unit.label(), "starting timed invocation");
    let start = Instant::now();
    let outcome = work();
    let elapsed = start.elapsed();
    outcome?;

    let measurement = Measurement::from_duration(elapsed, unit);
    debug!(
        elapsed = measurement.elapsed(),
        unit = measurement.label(),
        "timed invocation finished"
    );
    Ok(measurement)
}

/// Result of timing one invocation in unit `U`
#[derive(Debug, PartialEq, Eq)]
pub struct Timer<U: Unit = Milliseconds> {
    measurement: Measurement,
    unit: PhantomData<U>,
}

impl<U: Unit> Clone for Timer<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for Timer<U> {}

impl<U: Unit> Timer<U> {
    /// Time `work` without reporting
    pub fn new<F>(work: F) -> Self
    where
        F: FnOnce(),
    {
        Self::from_measurement(measure(U::UNIT, work))
    }

    pub fn try_new<F, E>(work: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        try_measure(U::UNIT, work).map(Self::from_measurement)
    }

    /// Time `work`, then print `"{prefix}{count} {label}."` to stdout
    pub fn with_message<F>(work: F, prefix: &str) -> io::Result<Self>
    where
        F: FnOnce(),
    {
        Self::with_report(work, Report::Message(prefix))
    }

    pub fn try_with_message<F, E>(work: F, prefix: &str) -> Result<Self, E>
    where
        F: FnOnce() -> Result<(), E>,
        E: From<io::Error>,
    {
        Self::try_with_report(work, Report::Message(prefix))
    }

    /// Like [`Timer::with_message`], writing to `sink` instead of stdout
    pub fn with_message_to<F, W>(work: F, prefix: &str, mut sink: W) -> io::Result<Self>
    where
        F: FnOnce(),
        W: Write,
    {
        Self::with_report(work, Report::MessageTo(prefix, &mut sink))
    }

    pub fn try_with_message_to<F, W, E>(work: F, prefix: &str, mut sink: W) -> Result<Self, E>
    where
        F: FnOnce() -> Result<(), E>,
        W: Write,
        E: From<io::Error>,
    {
        Self::try_with_report(work, Report::MessageTo(prefix, &mut sink))
    }

    /// Time `work`, then call `handler(count, label)` once
    pub fn with_handler<F, H>(work: F, handler: H) -> Self
    where
        F: FnOnce(),
        H: FnOnce(u64, &str),
    {
        Self::new(work).report_to_handler(handler)
    }

    pub fn try_with_handler<F, H, E>(work: F, handler: H) -> Result<Self, E>
    where
        F: FnOnce() -> Result<(), E>,
        H: FnOnce(u64, &str),
    {
        Self::try_new(work).map(|timer| timer.report_to_handler(handler))
    }

    /// Time `work` and deliver the measurement through `report`
    pub fn with_report<F>(work: F, report: Report<'_>) -> io::Result<Self>
    where
        F: FnOnce(),
    {
        let timer = Self::new(work);
        report.dispatch(&timer.measurement)?;
        Ok(timer)
    }

    pub fn try_with_report<F, E>(work: F, report: Report<'_>) -> Result<Self, E>
    where
        F: FnOnce() -> Result<(), E>,
        E: From<io::Error>,
    {
        let timer = Self::try_new(work)?;
        report.dispatch(&timer.measurement)?;
        Ok(timer)
    }

    fn report_to_handler<H>(self, handler: H) -> Self
    where
        H: FnOnce(u64, &str),
    {
        // Handler dispatch does no I/O and cannot fail.
        Report::handler(handler)
            .dispatch(&self.measurement)
            .map_or(self, |()| self)
    }

    fn from_measurement(measurement: Measurement) -> Self {
        Self {
            measurement,
            unit: PhantomData,
        }
    }

    /// Elapsed count in `U`
    pub fn elapsed_time(&self) -> u64 {
        self.measurement.elapsed()
    }

    pub fn units_as_str(&self) -> &'static str {
        U::UNIT.label()
    }

    pub fn unit(&self) -> DurationUnit {
        U::UNIT
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }
}
