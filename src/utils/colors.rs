//! ANSI color codes for record views.

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Empty cells render as a grey `--` placeholder.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
