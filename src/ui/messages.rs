use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

/// Warnings go to stderr so they never mix with report output.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}Warning: {}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}Error: {}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// The informational channel: short status words such as `BEGIN` and `END`,
/// printed on stdout unless the user asked for quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn inform<T: fmt::Display>(&self, msg: T) {
        if !self.quiet {
            println!("{}", msg);
        }
    }
}
