//! Colored console output for the command-line tool

use std::fmt::Display;

use colored::*;

/// Print a fatal error to stderr
pub fn print_error(message: impl Display) {
    eprintln!("{} {}", "❌ Error:".bold().red(), message.to_string().red());
}

/// Print a non-fatal warning to stderr
pub fn print_warning(message: impl Display) {
    eprintln!("{} {}", "⚠️ Warning:".bold().yellow(), message);
}
