//! User-facing messages
//!
//! Usage, confirmation and error text all go to stdout, colored only when
//! stdout is a terminal (and color isn't disabled in `tocsv.toml`).
//! Diagnostic logging is separate and goes to stderr via `log`.

use owo_colors::{OwoColorize, Stream};

/// Usage line printed for a wrong argument count
pub const USAGE: &str = "Usage: tocsv <filename_without_extension>";

/// Disable colors for the rest of the process
pub fn disable_colors() {
    owo_colors::set_override(false);
}

/// Display the usage line
pub fn usage() {
    println!("{}", USAGE.if_supports_color(Stream::Stdout, |t| t.yellow()));
}

/// Display an error message in red
///
/// # Example
/// ```ignore
/// output::error("Error: File 'bench.log' not found.");
/// ```
pub fn error(message: &str) {
    println!("{}", message.if_supports_color(Stream::Stdout, |t| t.red()));
}

/// Display a success message in green
pub fn success(message: &str) {
    println!("{}", message.if_supports_color(Stream::Stdout, |t| t.green()));
}

/// Success message for a finished conversion
pub fn created_message(output: &std::path::Path) -> String {
    format!("CSV file '{}' has been created successfully.", output.display())
}
