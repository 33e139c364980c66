//! Pass 2: Table Header Marking
//!
//! Drops pipe-delimited separator rows and marks the row immediately
//! preceding the first separator row of a table as its header by replacing
//! the trailing pipe with the normalized ` |h` suffix. Needs one slot of
//! lookahead, so it runs before the purely per-line passes.
//!
//! Only one header is recognized per table; once a separator row has been
//! seen, every remaining row of that table is data even when it is followed
//! by another separator. A non-pipe line ends the table.

use crate::patterns::{FenceTracker, MD_TABLE_ROW, MD_TABLE_SEPARATOR, MD_TABLE_TRAILING_PIPE};

/// Header suffix in Backlog table notation.
const HEADER_SUFFIX: &str = " |h";

/// Drop separator rows and mark header rows.
pub fn mark_tables(lines: Vec<String>) -> Vec<String> {
    let mut fences = FenceTracker::new();
    let mut separator_seen = false;
    let mut out = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if fences.observe(line) {
            separator_seen = false;
            out.push(line.clone());
            continue;
        }

        if MD_TABLE_SEPARATOR.is_match(line) {
            separator_seen = true;
            continue;
        }

        if MD_TABLE_ROW.is_match(line) {
            let next_is_separator = lines
                .get(i + 1)
                .is_some_and(|next| MD_TABLE_SEPARATOR.is_match(next));
            if next_is_separator && !separator_seen {
                out.push(
                    MD_TABLE_TRAILING_PIPE
                        .replace(line, HEADER_SUFFIX)
                        .into_owned(),
                );
            } else {
                out.push(line.clone());
            }
        } else {
            separator_seen = false;
            out.push(line.clone());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(lines: &[&str]) -> Vec<String> {
        mark_tables(lines.iter().map(|l| l.to_string()).collect())
    }

    // Test 1: separator dropped, header marked, data untouched
    #[test]
    fn test_basic_table() {
        let out = run(&["| a | b |", "| --- | --- |", "| 1 | 2 |"]);
        assert_eq!(out, vec!["| a | b |h", "| 1 | 2 |"]);
    }

    // Test 2: a second separator in the same table does not mint a header
    #[test]
    fn test_single_header_per_table() {
        let out = run(&["| a |", "| --- |", "| b |", "| --- |", "| c |"]);
        assert_eq!(out, vec!["| a |h", "| b |", "| c |"]);
    }

    // Test 3: a new table after a gap gets its own header
    #[test]
    fn test_new_table_after_gap() {
        let out = run(&["| a |", "| --- |", "", "| x |", "| --- |", "| y |"]);
        assert_eq!(out, vec!["| a |h", "", "| x |h", "| y |"]);
    }

    // Test 4: rows without a following separator pass through unchanged
    #[test]
    fn test_headerless_table() {
        let out = run(&["| 1 | 2 |", "| 3 | 4 |"]);
        assert_eq!(out, vec!["| 1 | 2 |", "| 3 | 4 |"]);
    }

    // Test 5: trailing whitespace around the final pipe is normalized away
    #[test]
    fn test_header_suffix_normalized() {
        let out = run(&["| a | b |  ", "|---|---|"]);
        assert_eq!(out, vec!["| a | b |h"]);
    }

    // Test 6: separator-shaped lines inside a code region survive
    #[test]
    fn test_code_region_opaque() {
        let out = run(&["{code}", "| --- |", "{/code}"]);
        assert_eq!(out, vec!["{code}", "| --- |", "{/code}"]);
    }

    // Test 7: a leading separator consumes the table's header slot
    #[test]
    fn test_leading_separator_spends_header() {
        let out = run(&["| --- |", "| a |", "| --- |", "| b |"]);
        assert_eq!(out, vec!["| a |", "| b |"]);
    }
}
