//! Pass 6: HTML Line Breaks
//!
//! A single literal substitution: every `<br>` outside a code region
//! becomes the Backlog escape `&br;`. No other HTML is recognized.

use crate::patterns::FenceTracker;

const HTML_BREAK: &str = "<br>";
const BACKLOG_BREAK: &str = "&br;";

/// Replace literal `<br>` tags in every non-opaque slot.
pub fn rewrite_line_breaks(lines: Vec<String>) -> Vec<String> {
    let mut fences = FenceTracker::new();
    lines
        .into_iter()
        .map(|line| {
            if fences.observe(&line) {
                return line;
            }
            line.replace(HTML_BREAK, BACKLOG_BREAK)
        })
        .collect()
}
