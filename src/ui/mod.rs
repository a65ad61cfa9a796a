//! Terminal presentation for the command-line tool

pub mod console;
pub mod units_table;

pub use units_table::units_table;
