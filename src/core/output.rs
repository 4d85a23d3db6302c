//! Message formatting around the status table.
//!
//! The table itself is plain text from [`crate::core::presenter`]; these helpers style the
//! messages printed before and after it.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, bright_black for hints
//! - **Stdout stays parseable**: Warnings go to stderr so the table can be piped

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints a warning line to stderr
///
/// # Format
/// ```text
/// ! <message>
/// ```
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "!".yellow(), message);
}

/// Prints a muted hint line to stderr
pub fn print_hint(message: &str) {
    eprintln!("{}", message.bright_black());
}
