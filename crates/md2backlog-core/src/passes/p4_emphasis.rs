//! Pass 4: Emphasis / Decoration
//!
//! Three independent non-greedy substitutions per eligible line, in a
//! fixed order: bold `**X**` → `''X''`, italic `*X*` → `'''X'''`,
//! strikethrough `~~X~~` → `%%X%%`. Bold runs first so the italic rule
//! only ever sees single asterisks left over after the bold rewrite.
//!
//! Heading-shaped lines are excluded — their literal leading asterisks
//! must not be misread as emphasis delimiters — and code-region slots are
//! opaque. The quote pass applies the same three rules to stripped quote
//! content via [`apply_decorations`].

use crate::patterns::{BACKLOG_HEADING, FenceTracker, MD_BOLD, MD_ITALIC, MD_STRIKETHROUGH};

/// Decorate every eligible slot.
pub fn decorate_lines(lines: Vec<String>) -> Vec<String> {
    let mut fences = FenceTracker::new();
    lines
        .into_iter()
        .map(|line| {
            if fences.observe(&line) || BACKLOG_HEADING.is_match(&line) {
                return line;
            }
            apply_decorations(&line)
        })
        .collect()
}

/// Apply the three decoration rules to a span of text, bold before italic.
pub(crate) fn apply_decorations(text: &str) -> String {
    let text = MD_BOLD.replace_all(text, "''${1}''");
    let text = MD_ITALIC.replace_all(&text, "'''${1}'''");
    MD_STRIKETHROUGH.replace_all(&text, "%%${1}%%").into_owned()
}
