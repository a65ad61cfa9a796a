//! Reporting of finished measurements
//!
//! A [`Report`] decides what happens to a [`Measurement`] once the timed work
//! has returned: nothing, a sentence on stdout or another sink, or a call into
//! a caller-supplied handler.

use std::io::{self, Write};

use crate::stats::Measurement;

/// What to do with a measurement once it exists
pub enum Report<'a> {
    /// Keep the measurement for the accessors only
    Silent,
    /// Write `"{prefix}{count} {label}.\n"` to stdout
    Message(&'a str),
    /// Same line as [`Report::Message`], written to the given sink
    MessageTo(&'a str, &'a mut dyn Write),
    /// Hand the count and label to a handler, exactly once
    Handler(Box<dyn FnOnce(u64, &str) + 'a>),
}

impl<'a> Report<'a> {
    pub fn handler<H>(handler: H) -> Self
    where
        H: FnOnce(u64, &str) + 'a,
    {
        Report::Handler(Box::new(handler))
    }

    /// Deliver `measurement`. Sink errors are returned untouched.
    pub fn dispatch(self, measurement: &Measurement) -> io::Result<()> {
        match self {
            Report::Silent => Ok(()),
            Report::Message(prefix) => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                write_report(&mut lock, prefix, measurement)
            }
            Report::MessageTo(prefix, sink) => write_report(sink, prefix, measurement),
            Report::Handler(handler) => {
                handler(measurement.elapsed(), measurement.label());
                Ok(())
            }
        }
    }
}

/// Full report line, including the trailing newline
pub fn format_report(prefix: &str, measurement: &Measurement) -> String {
    format!("{}{}.\n", prefix, measurement)
}

/// Write the report line to `sink` with a single `write_all`, then flush
pub fn write_report<W>(sink: &mut W, prefix: &str, measurement: &Measurement) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let line = format_report(prefix, measurement);
    sink.write_all(line.as_bytes())?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::DurationUnit;
    use std::cell::Cell;
    use std::time::Duration;

    fn one_second() -> Measurement {
        Measurement::from_duration(Duration::from_millis(1_000), DurationUnit::Milliseconds)
    }

    #[test]
    fn line_format_is_exact() {
        assert_eq!(
            format_report("Slept for ", &one_second()),
            "Slept for 1000 milliseconds.\n"
        );
        assert_eq!(format_report("", &one_second()), "1000 milliseconds.\n");
    }

    #[test]
    fn message_to_writes_into_sink() {
        let mut buffer = Vec::new();
        Report::MessageTo("Took ", &mut buffer)
            .dispatch(&one_second())
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Took 1000 milliseconds.\n");
    }

    #[test]
    fn handler_runs_once_with_count_and_label() {
        let calls = Cell::new(0);
        let mut seen = None;
        Report::handler(|count, label| {
            calls.set(calls.get() + 1);
            seen = Some((count, label.to_string()));
        })
        .dispatch(&one_second())
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(seen, Some((1_000, "milliseconds".to_string())));
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let mut sink = ClosedSink;
        let err = Report::MessageTo("x", &mut sink)
            .dispatch(&one_second())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
