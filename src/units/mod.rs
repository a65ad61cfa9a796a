//! Time units a measurement can be expressed in

pub mod duration_unit;
pub mod markers;

pub use duration_unit::DurationUnit;
pub use markers::{Microseconds, Milliseconds, Minutes, Nanoseconds, Seconds, Unit};
