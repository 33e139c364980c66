//! Pass 1: Quote Delimiting
//!
//! Rewrites `>`-prefixed runs into Backlog `{quote}` / `{/quote}` blocks.
//! Stripped content is rewritten inline — nested-list first, then the three
//! emphasis rules — because the later per-line passes only see the content
//! without its quote prefix.
//!
//! Unlike code blocks, a quote still open at end of document is always
//! closed implicitly.

use crate::config::ConvertOptions;
use crate::passes::p3_line_markup::rewrite_nested_list;
use crate::passes::p4_emphasis::apply_decorations;
use crate::patterns::{FenceTracker, MD_QUOTE_PREFIX, QUOTE_CLOSE, QUOTE_OPEN};

/// Delimit quote runs, threading a single "inside quote" flag across the
/// scan. Code-region slots are opaque: they never open a quote, and like
/// any other non-quote line they terminate one already open.
pub fn delimit_quotes(lines: Vec<String>, options: &ConvertOptions) -> Vec<String> {
    let mut fences = FenceTracker::new();
    let mut inside = false;
    let mut out = Vec::with_capacity(lines.len() + 2);

    for line in lines {
        let opaque = fences.observe(&line);

        if !opaque && MD_QUOTE_PREFIX.is_match(&line) {
            if !inside {
                out.push(QUOTE_OPEN.to_string());
                inside = true;
            }
            out.push(rewrite_content(&line, options));
        } else {
            if inside {
                out.push(QUOTE_CLOSE.to_string());
                inside = false;
            }
            out.push(line);
        }
    }

    if inside {
        out.push(QUOTE_CLOSE.to_string());
    }

    out
}

/// Strip the quote prefix (`>` plus at most one space) and rewrite the
/// remaining content.
fn rewrite_content(line: &str, options: &ConvertOptions) -> String {
    let content = MD_QUOTE_PREFIX.replace(line, "");
    let content = match rewrite_nested_list(&content, options.indent_unit) {
        Some(rewritten) => rewritten,
        None => content.into_owned(),
    };
    apply_decorations(&content)
}
