//! Formatting utilities used for CLI messages and reports.

use ansi_term::Style;
use chrono::TimeDelta;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Render line numbers the way they would be written in English:
/// `5`, `5 and 6`, `5, 6, and 7`.
pub fn spoken_list(list: &[u64]) -> String {
    let n = list.len();
    let mut out = String::new();

    for (i, item) in list.iter().enumerate() {
        out.push_str(&item.to_string());
        if i + 2 < n {
            out.push_str(", ");
        } else if i + 1 < n {
            out.push_str(if n == 2 { " and " } else { ", and " });
        }
    }

    out
}

/// Elapsed time as `HHh MMm SSs`, with a leading `-` for negative spans.
///
/// Hours are not wrapped into days, totals over a long project read as
/// `153h 07m 12s`.
pub fn readable_duration(delta: TimeDelta) -> String {
    let secs = delta.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let abs_s = secs.unsigned_abs();

    let hours = abs_s / 3600;
    let minutes = (abs_s % 3600) / 60;
    let seconds = abs_s % 60;

    format!("{}{:02}h {:02}m {:02}s", sign, hours, minutes, seconds)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
