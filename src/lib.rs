//! Stopwatch Library
//!
//! Times a single piece of work and reports how long it took, either through
//! accessors, as a sentence on a text sink, or through a callback.
//!
//! ```
//! use stopwatch::{Timer, units::Milliseconds};
//!
//! let mut out = Vec::new();
//! let timer = Timer::<Milliseconds>::with_message_to(|| {}, "Took ", &mut out)?;
//! assert_eq!(timer.units_as_str(), "milliseconds");
//! assert!(String::from_utf8(out).unwrap().ends_with(" milliseconds.\n"));
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod stats;
pub mod ui;
pub mod units;
pub mod utils;

pub use crate::core::{format_report, measure, try_measure, write_report, Report, Timer};
pub use crate::stats::Measurement;
pub use crate::units::{DurationUnit, Unit};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
