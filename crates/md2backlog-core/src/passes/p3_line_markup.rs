//! Pass 3: Per-Line Markup
//!
//! The purely per-line rewrites, applied to every slot outside code
//! regions:
//!
//! 1. strip one trailing carriage return (output is LF-only)
//! 2. heading: `#{n} text` → `*{n} text`, hash run length preserved
//! 3. nested list: tab depth k → k+1 dashes; space depth s →
//!    `floor(s / indent_unit) + 1` dashes
//! 4. numbered list: `N. text` → `+ text`, the number is style-only and
//!    discarded
//!
//! The patterns are mutually exclusive; the first match wins and a line
//! matching none passes through unchanged. Tabs and spaces are never mixed
//! in one line's leading whitespace for the list rules to apply.

use crate::config::ConvertOptions;
use crate::patterns::{
    FenceTracker, MD_HEADING, MD_LIST_NUMBERED, MD_LIST_SPACES, MD_LIST_TABS,
};

/// Apply the per-line rewrites to every non-opaque slot.
pub fn rewrite_lines(lines: Vec<String>, options: &ConvertOptions) -> Vec<String> {
    let mut fences = FenceTracker::new();
    lines
        .into_iter()
        .map(|line| {
            if fences.observe(&line) {
                return line;
            }
            let line = strip_carriage_return(line);
            rewrite_line(&line, options.indent_unit).unwrap_or(line)
        })
        .collect()
}

/// Rewrite a single line, or `None` when no per-line pattern matches.
fn rewrite_line(line: &str, indent_unit: usize) -> Option<String> {
    if let Some(caps) = MD_HEADING.captures(line) {
        return Some(format!("{} {}", "*".repeat(caps[1].len()), &caps[2]));
    }
    if let Some(rewritten) = rewrite_nested_list(line, indent_unit) {
        return Some(rewritten);
    }
    if let Some(caps) = MD_LIST_NUMBERED.captures(line) {
        return Some(format!("+ {}", &caps[1]));
    }
    None
}

/// Nested-list rewrite, shared with the quote pass which applies it to
/// stripped quote content.
pub(crate) fn rewrite_nested_list(line: &str, indent_unit: usize) -> Option<String> {
    if let Some(caps) = MD_LIST_TABS.captures(line) {
        let depth = caps[1].len() + 1;
        return Some(format!("{} {}", "-".repeat(depth), &caps[2]));
    }
    if let Some(caps) = MD_LIST_SPACES.captures(line) {
        let depth = caps[1].len() / indent_unit + 1;
        return Some(format!("{} {}", "-".repeat(depth), &caps[2]));
    }
    None
}

fn strip_carriage_return(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(lines: &[&str]) -> Vec<String> {
        rewrite_lines(
            lines.iter().map(|l| l.to_string()).collect(),
            &ConvertOptions::default(),
        )
    }

    // Test 1: hash run length maps 1:1 onto the marker run
    #[test]
    fn test_heading_depths() {
        let out = run(&["# one", "## two", "### three"]);
        assert_eq!(out, vec!["* one", "** two", "*** three"]);
    }

    // Test 2: a hash run without following whitespace is not a heading
    #[test]
    fn test_hash_without_space_unchanged() {
        let out = run(&["#hashtag"]);
        assert_eq!(out, vec!["#hashtag"]);
    }

    // Test 3: k leading tabs produce k+1 dashes
    #[test]
    fn test_tab_nested_list() {
        let out = run(&["\t- a", "\t\t- b", "\t\t\t- c"]);
        assert_eq!(out, vec!["-- a", "--- b", "---- c"]);
    }

    // Test 4: space indentation divides by the indent unit
    #[test]
    fn test_space_nested_list_default_unit() {
        let out = run(&["  - a", "    - b", "   - odd"]);
        assert_eq!(out, vec!["-- a", "--- b", "-- odd"]);
    }

    // Test 5: indent unit is configurable
    #[test]
    fn test_space_nested_list_custom_unit() {
        let out = rewrite_lines(
            vec!["    - a".to_string()],
            &ConvertOptions { indent_unit: 4 },
        );
        assert_eq!(out, vec!["-- a"]);
    }

    // Test 6: unindented dash lines are left alone
    #[test]
    fn test_top_level_dash_unchanged() {
        let out = run(&["- top"]);
        assert_eq!(out, vec!["- top"]);
    }

    // Test 7: mixed tab/space indentation matches neither list rule
    #[test]
    fn test_mixed_indentation_unchanged() {
        let out = run(&["\t - mixed"]);
        assert_eq!(out, vec!["\t - mixed"]);
    }

    // Test 8: numbered lists discard their numeric value
    #[test]
    fn test_numbered_list() {
        let out = run(&["1. first", "12. twelfth"]);
        assert_eq!(out, vec!["+ first", "+ twelfth"]);
    }

    // Test 9: carriage returns are stripped from rewritten lines
    #[test]
    fn test_carriage_return_stripped() {
        let out = run(&["# title\r", "plain\r"]);
        assert_eq!(out, vec!["* title", "plain"]);
    }

    // Test 10: code-region slots keep their content and their CR
    #[test]
    fn test_code_region_opaque() {
        let out = run(&["{code}", "# not a heading\r", "{/code}"]);
        assert_eq!(out, vec!["{code}", "# not a heading\r", "{/code}"]);
    }
}
