//! Pass 7: Heading Whitespace Trim
//!
//! Final pass. When a heading-shaped line arrives, blank lines accumulated
//! immediately before it are popped, and a single blank line immediately
//! after it is skipped, so no blank line directly touches a heading on
//! either side. Blank lines elsewhere are untouched. Line-count reducing
//! by design.

use crate::patterns::{BACKLOG_HEADING, FenceTracker};

/// Strip blank lines surrounding heading-shaped lines.
pub fn trim_blank_lines(lines: Vec<String>) -> Vec<String> {
    let mut fences = FenceTracker::new();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut skip_blank = false;

    for line in lines {
        let opaque = fences.observe(&line);

        if !opaque && skip_blank && is_blank(&line) {
            skip_blank = false;
            continue;
        }
        skip_blank = false;

        if !opaque && BACKLOG_HEADING.is_match(&line) {
            while out.last().is_some_and(|last| is_blank(last)) {
                out.pop();
            }
            out.push(line);
            skip_blank = true;
        } else {
            out.push(line);
        }
    }

    out
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
