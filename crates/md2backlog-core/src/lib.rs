//! Convert Markdown documents into Backlog wiki notation.
//!
//! The converter is a pipeline of line- and document-level rewrite passes
//! applied in a fixed order — code fences first so later passes can skip
//! code content, then the lookahead block passes (quote, table), then the
//! per-line rewrites, and finally heading whitespace trimming. Each pass is
//! a pure function of its input slots; the only mutable state is a block
//! flag local to a single pass scan.
//!
//! ## Usage
//!
//! ```rust
//! use md2backlog_core::{convert, ConvertOptions};
//!
//! let markdown = "# Title\n\n**bold** and [a link](http://example.com)";
//! let backlog = convert(markdown, &ConvertOptions::default()).unwrap();
//! assert_eq!(backlog, "* Title\n''bold'' and [[a link>http://example.com]]");
//! ```

pub mod config;
pub mod error;
mod patterns;
pub mod passes;

pub use config::ConvertOptions;
pub use error::ConvertError;

use passes::{
    p0_code_fence, p1_quote, p2_table, p3_line_markup, p4_emphasis, p5_links, p6_html,
    p7_heading_trim,
};

/// Convert a whole Markdown document into Backlog wiki notation.
///
/// Total over arbitrary text: malformed or unterminated constructs resolve
/// deterministically (quotes close implicitly at end of document, code
/// fences stay open) instead of failing. The input may mix line
/// terminators; the output is LF-only. The only error is an invalid
/// configuration, rejected before any pass runs.
pub fn convert(input: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    options.validate()?;

    let lines: Vec<String> = input.split('\n').map(str::to_owned).collect();

    let lines = p0_code_fence::fence_code_blocks(lines);
    let lines = p1_quote::delimit_quotes(lines, options);
    let lines = p2_table::mark_tables(lines);
    let lines = p3_line_markup::rewrite_lines(lines, options);
    let lines = p4_emphasis::decorate_lines(lines);
    let lines = p5_links::rewrite_links(lines);
    let lines = p6_html::rewrite_line_breaks(lines);
    let lines = p7_heading_trim::trim_blank_lines(lines);

    Ok(lines.join("\n"))
}
