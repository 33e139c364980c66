//! Pattern catalogue for the conversion pipeline.
//!
//! Every regex used by the passes is compiled exactly once into a
//! `LazyLock` static here, so each pass reads as a sequence of rewrites
//! against named patterns instead of inline regex literals. The Backlog
//! marker tokens emitted by the block passes live here too, next to the
//! [`FenceTracker`] that recognizes them on later scans.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Backlog marker tokens
// ---------------------------------------------------------------------------

/// Start delimiter of a Backlog code block.
pub(crate) const CODE_OPEN: &str = "{code}";
/// End delimiter of a Backlog code block.
pub(crate) const CODE_CLOSE: &str = "{/code}";
/// Start delimiter of a Backlog quote block.
pub(crate) const QUOTE_OPEN: &str = "{quote}";
/// End delimiter of a Backlog quote block.
pub(crate) const QUOTE_CLOSE: &str = "{/quote}";

/// A tagged fence rewrites to the start marker with the language tag
/// relocated onto its own physical line inside the same document slot.
pub(crate) const CODE_OPEN_TAGGED_PREFIX: &str = "{code}\n";

// ---------------------------------------------------------------------------
// Markdown-side patterns
// ---------------------------------------------------------------------------

/// ATX heading: one or more `#`, whitespace, text.
pub(crate) static MD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());

/// Nested list line indented with tabs only.
pub(crate) static MD_LIST_TABS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\t+)- (.+)$").unwrap());

/// Nested list line indented with spaces only.
pub(crate) static MD_LIST_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( +)- (.+)$").unwrap());

/// Numbered list line: digits, period, whitespace, text.
pub(crate) static MD_LIST_NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());

/// Opening fence carrying a language tag, e.g. ```` ```javascript ````.
pub(crate) static MD_FENCE_TAGGED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(\w+)\s*$").unwrap());

/// Bare fence: three backticks and nothing but trailing whitespace.
pub(crate) static MD_FENCE_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```\s*$").unwrap());

/// Quote prefix: `>` optionally followed by one space.
pub(crate) static MD_QUOTE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^> ?").unwrap());

/// Table separator row: only dashes and whitespace between pipes.
pub(crate) static MD_TABLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|(?:\s*-+\s*\|)+\s*$").unwrap());

/// Generic pipe-delimited table row.
pub(crate) static MD_TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|.*\|\s*$").unwrap());

/// Trailing pipe of a table row, with any surrounding whitespace.
pub(crate) static MD_TABLE_TRAILING_PIPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\|\s*$").unwrap());

/// Bold span. Rewritten before [`MD_ITALIC`] so the italic rule only ever
/// sees single asterisks left over after the bold rewrite.
pub(crate) static MD_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Italic span.
pub(crate) static MD_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Strikethrough span.
pub(crate) static MD_STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

/// Inline Markdown link, non-greedy on both captures.
pub(crate) static MD_INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

/// Bare URL with its preceding character (or line start) captured.
/// A URL sitting right after `>` belongs to a just-produced
/// `[[text>url]]` span and must stay unwrapped, so `>` is excluded
/// from the preceding-character class.
pub(crate) static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^>])(https?://[^\s\[\]]+)").unwrap());

// ---------------------------------------------------------------------------
// Backlog-side patterns
// ---------------------------------------------------------------------------

/// Converted heading shape: leading `*` run plus whitespace. Recognition is
/// structural, not provenance-based — any line of this shape counts.
pub(crate) static BACKLOG_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*+\s").unwrap());

// ---------------------------------------------------------------------------
// Code-region tracking
// ---------------------------------------------------------------------------

/// Recognizes `{code}` regions already emitted by the code-fence pass.
///
/// Each pass that runs after the fence pass owns a fresh tracker and feeds
/// it every slot in order; the flag never leaks across pass invocations.
/// Marker slots and everything between an open marker and its close are
/// reported opaque. An unterminated region stays open to the end of the
/// document, so the tail remains opaque.
pub(crate) struct FenceTracker {
    inside: bool,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self { inside: false }
    }

    /// Advance over one slot, returning true when the slot is opaque.
    pub(crate) fn observe(&mut self, line: &str) -> bool {
        if self.inside {
            if line == CODE_CLOSE {
                self.inside = false;
            }
            true
        } else if line == CODE_OPEN || line.starts_with(CODE_OPEN_TAGGED_PREFIX) {
            self.inside = true;
            true
        } else {
            false
        }
    }
}
