//! Compile-time unit selection
//!
//! Each marker is a zero-sized type naming one [`DurationUnit`], so a timer's
//! unit can be fixed in its type: `Timer::<Milliseconds>::new(...)`.

use crate::units::duration_unit::DurationUnit;

/// A unit chosen at compile time
pub trait Unit {
    const UNIT: DurationUnit;
}

macro_rules! unit_marker {
    ($($(#[$meta:meta])* $name:ident => $variant:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            pub struct $name;

            impl Unit for $name {
                const UNIT: DurationUnit = DurationUnit::$variant;
            }
        )*
    };
}

unit_marker! {
    Nanoseconds => Nanoseconds,
    Microseconds => Microseconds,
    /// Default granularity for message reports
    Milliseconds => Milliseconds,
    Seconds => Seconds,
    Minutes => Minutes,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_of<U: Unit>() -> &'static str {
        U::UNIT.label()
    }

    #[test]
    fn markers_name_their_unit() {
        assert_eq!(label_of::<Nanoseconds>(), "nanoseconds");
        assert_eq!(label_of::<Microseconds>(), "microseconds");
        assert_eq!(label_of::<Milliseconds>(), "milliseconds");
        assert_eq!(label_of::<Seconds>(), "seconds");
        assert_eq!(label_of::<Minutes>(), "minutes");
    }
}
