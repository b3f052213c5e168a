//! Output helpers shared by the CLI commands.

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print a warning message with a warning sign prefix to stderr.
pub fn print_warning(msg: &str) {
    eprintln!("\u{26A0}\u{FE0F} {}", msg);
}

