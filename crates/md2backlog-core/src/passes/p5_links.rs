//! Pass 5: Links and Bare URLs
//!
//! Two ordered substitutions: inline links `[text](url)` → `[[text>url]]`
//! first, then bare `http(s)://` runs wrapped as `[[url]]`. The bare-URL
//! rule captures the immediately preceding character and skips URLs sitting
//! right after `>`, so the URL half of a just-produced `[[text>url]]` span
//! is not wrapped a second time. That one-character check is the whole
//! heuristic; URLs adjacent to anything else are fair game.
//!
//! Runs after the block passes have finalized code regions, which stay
//! opaque.

use crate::patterns::{BARE_URL, FenceTracker, MD_INLINE_LINK};

/// Rewrite inline links and bare URLs in every non-opaque slot.
pub fn rewrite_links(lines: Vec<String>) -> Vec<String> {
    let mut fences = FenceTracker::new();
    lines
        .into_iter()
        .map(|line| {
            if fences.observe(&line) {
                return line;
            }
            let line = MD_INLINE_LINK.replace_all(&line, "[[${1}>${2}]]");
            BARE_URL.replace_all(&line, "${1}[[${2}]]").into_owned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(line: &str) -> String {
        rewrite_links(vec![line.to_string()]).remove(0)
    }

    // Test 1: inline link
    #[test]
    fn test_inline_link() {
        assert_eq!(
            run("[Example](http://example.com)"),
            "[[Example>http://example.com]]"
        );
    }

    // Test 2: the converted link's URL is not wrapped again
    #[test]
    fn test_no_double_wrap() {
        assert_eq!(
            run("see [Example](https://example.com) here"),
            "see [[Example>https://example.com]] here"
        );
    }

    // Test 3: bare URL mid-line, preceding character re-emitted
    #[test]
    fn test_bare_url_mid_line() {
        assert_eq!(run("go to http://x.com now"), "go to [[http://x.com]] now");
    }

    // Test 4: bare URL at line start
    #[test]
    fn test_bare_url_line_start() {
        assert_eq!(run("https://x.com rest"), "[[https://x.com]] rest");
    }

    // Test 5: two inline links on one line stay separate
    #[test]
    fn test_two_links_non_greedy() {
        assert_eq!(
            run("[a](http://a.com) [b](http://b.com)"),
            "[[a>http://a.com]] [[b>http://b.com]]"
        );
    }

    // Test 6: URLs inside code regions are opaque
    #[test]
    fn test_code_region_opaque() {
        let out = rewrite_links(
            ["{code}", "http://x.com", "{/code}"]
                .iter()
                .map(|l| l.to_string())
                .collect(),
        );
        assert_eq!(out, vec!["{code}", "http://x.com", "{/code}"]);
    }
}
