//! Utility functions and helpers for working with report lines

use std::io::{self, Error, ErrorKind};

use crate::units::DurationUnit;

/// A report line split back into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub prefix: String,
    pub elapsed: u64,
    pub unit: DurationUnit,
}

/// Parse a line of the form `"{prefix}{count} {label}."`
///
/// Example input: "Slept for 1000 milliseconds."
/// A prefix ending in digits cannot be told apart from the count, so the count
/// is taken to be every trailing digit before the space.
pub fn parse_report_line(line: &str) -> io::Result<ParsedReport> {
    let invalid = |what: &str| Error::new(ErrorKind::InvalidData, format!("{}: {:?}", what, line));

    let body = line
        .trim_end_matches(['\n', '\r'])
        .strip_suffix('.')
        .ok_or_else(|| invalid("Report line must end with a period"))?;

    let (head, label) = body
        .rsplit_once(' ')
        .ok_or_else(|| invalid("Report line has no unit label"))?;

    let unit = DurationUnit::all()
        .iter()
        .copied()
        .find(|unit| unit.label() == label)
        .ok_or_else(|| invalid("Unknown unit label in report line"))?;

    let digits = head.bytes().rev().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(invalid("Report line has no elapsed count"));
    }
    let split = head.len() - digits;
    let elapsed = head[split..]
        .parse()
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

    Ok(ParsedReport {
        prefix: head[..split].to_string(),
        elapsed,
        unit,
    })
}
