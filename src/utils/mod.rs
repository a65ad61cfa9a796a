//! Helpers shared by the library and the command-line tool

pub mod helpers;
pub mod logger;

pub use helpers::{parse_report_line, ParsedReport};
pub use logger::init_logging;
