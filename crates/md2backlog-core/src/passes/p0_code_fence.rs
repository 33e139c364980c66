//! Pass 0: Code Block Fencing
//!
//! Rewrites triple-backtick fences into Backlog `{code}` / `{/code}`
//! markers. This is the foundational pass — every later pass recognizes the
//! markers it emits and treats the region between them as opaque content.
//!
//! A tagged fence (```` ```lang ````) becomes the start marker with the
//! language tag relocated onto its own physical line, kept inside a single
//! document slot so the slot count is preserved. A bare fence closes an
//! open block, or opens an untagged one when no block is open.
//!
//! Unterminated blocks are left open at end of document — no synthetic
//! closing marker. Quotes close implicitly there; code blocks do not, and
//! the later passes keep treating the tail as opaque.

use crate::patterns::{CODE_CLOSE, CODE_OPEN, MD_FENCE_BARE, MD_FENCE_TAGGED};

/// Rewrite fence lines to Backlog code markers, threading a single
/// "inside code block" flag across the scan.
pub fn fence_code_blocks(lines: Vec<String>) -> Vec<String> {
    let mut inside = false;
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        if inside {
            if MD_FENCE_BARE.is_match(&line) {
                out.push(CODE_CLOSE.to_string());
                inside = false;
            } else {
                out.push(line);
            }
        } else if let Some(caps) = MD_FENCE_TAGGED.captures(&line) {
            out.push(format!("{CODE_OPEN}\n{}", &caps[1]));
            inside = true;
        } else if MD_FENCE_BARE.is_match(&line) {
            out.push(CODE_OPEN.to_string());
            inside = true;
        } else {
            out.push(line);
        }
    }

    if inside {
        tracing::warn!("document ended inside an unterminated code fence");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(lines: &[&str]) -> Vec<String> {
        fence_code_blocks(lines.iter().map(|l| l.to_string()).collect())
    }

    // Test 1: tagged fence relocates the language tag into the same slot
    #[test]
    fn test_tagged_fence_relocates_tag() {
        let out = run(&["```javascript", "const x = 1;", "```"]);
        assert_eq!(out, vec!["{code}\njavascript", "const x = 1;", "{/code}"]);
    }

    // Test 2: bare fences delimit an untagged block
    #[test]
    fn test_bare_fence_pair() {
        let out = run(&["```", "body", "```", "after"]);
        assert_eq!(out, vec!["{code}", "body", "{/code}", "after"]);
    }

    // Test 3: slot count is preserved
    #[test]
    fn test_slot_count_preserved() {
        let input = ["a", "```rust", "fn main() {}", "```", "b"];
        assert_eq!(run(&input).len(), input.len());
    }

    // Test 4: a tagged fence while inside a block is plain content
    #[test]
    fn test_tagged_fence_inside_block_is_content() {
        let out = run(&["```", "```javascript", "```"]);
        assert_eq!(out, vec!["{code}", "```javascript", "{/code}"]);
    }

    // Test 5: unterminated block stays open, no synthetic close
    #[test]
    fn test_unterminated_block_left_open() {
        let out = run(&["```sh", "echo hi"]);
        assert_eq!(out, vec!["{code}\nsh", "echo hi"]);
    }

    // Test 6: closing fence tolerates trailing whitespace
    #[test]
    fn test_closing_fence_trailing_whitespace() {
        let out = run(&["```", "body", "```  "]);
        assert_eq!(out, vec!["{code}", "body", "{/code}"]);
    }

    // Test 7: indented backticks are not fences
    #[test]
    fn test_indented_backticks_ignored() {
        let out = run(&["  ```", "text"]);
        assert_eq!(out, vec!["  ```", "text"]);
    }
}
