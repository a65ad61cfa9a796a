//! Core timing: the [`Timer`] wrapper and how its results are reported

pub mod report;
pub mod timer;

pub use report::{format_report, write_report, Report};
pub use timer::{measure, try_measure, Timer};

/// Time a statement or block and print `"{prefix}{count} milliseconds."` to stdout.
///
/// Evaluates to the `io::Result<Timer<Milliseconds>>` of the write.
///
/// ```no_run
/// # fn main() -> std::io::Result<()> {
/// stopwatch::time_in_milliseconds!(std::thread::sleep(std::time::Duration::from_secs(1)), "Slept for ")?;
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! time_in_milliseconds {
    ($work:expr, $prefix:expr $(,)?) => {
        $crate::Timer::<$crate::units::Milliseconds>::with_message(
            || {
                $work;
            },
            $prefix,
        )
    };
}
