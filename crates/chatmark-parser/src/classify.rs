//! Line classification.
//!
//! Each line is classified on its trimmed form, independently of the lines
//! around it. The only context that matters is whether a table run is open,
//! because separator rows are only recognised inside one. Fenced code is
//! handled by the segmenter before classification is consulted.

use chatmark_core::ListKind;
use regex::Regex;
use std::sync::LazyLock;

/// Three backticks open and close a fenced code block.
pub const FENCE: &str = "```";

/// Regex for headings: longest marker run first, at most four.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,4})\s*(.*)$").unwrap());

/// Regex for block quotes: `>` plus one optional whitespace character.
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s?(.*)$").unwrap());

/// Regex for unordered list items: -, * or + followed by whitespace.
static UNORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s(.*)$").unwrap());

/// Regex for ordered list items: digits, a dot, whitespace.
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s(.*)$").unwrap());

/// Regex for table separator rows such as `|---|:--:|`.
static TABLE_SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|[\s:-]+\|").unwrap());

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opening fence with its declared language, if any
    Fence { language: Option<&'a str> },
    /// Table row or separator
    TableRow,
    /// Heading; `text` may be empty for a marker-only line
    Heading { level: u8, text: &'a str },
    /// Block quote; `text` may be empty
    Quote { text: &'a str },
    /// List item of either kind
    ListItem { kind: ListKind, text: &'a str },
    /// Whitespace-only line
    Blank,
    /// Anything else
    Text,
}

/// Whether a trimmed line opens or closes a fence.
pub fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with(FENCE)
}

/// Whether a trimmed line is a table row candidate.
///
/// A candidate contains `|` and splits into at least three parts.
pub fn is_table_row(trimmed: &str) -> bool {
    trimmed.contains('|') && trimmed.split('|').nth(2).is_some()
}

/// Whether a trimmed line is a table separator row.
pub fn is_table_separator(trimmed: &str) -> bool {
    TABLE_SEP_RE.is_match(trimmed)
}

/// Classify a trimmed line.
///
/// Precedence is fixed: fence, table row/separator, heading, block quote,
/// unordered item, ordered item, blank, text.
///
/// # Example
///
/// ```
/// use chatmark_parser::classify::{classify, LineClass};
///
/// assert_eq!(classify("## Title", false), LineClass::Heading { level: 2, text: "Title" });
/// assert_eq!(classify("", false), LineClass::Blank);
/// ```
pub fn classify(trimmed: &str, in_table: bool) -> LineClass<'_> {
    if let Some(rest) = trimmed.strip_prefix(FENCE) {
        let language = rest.trim();
        return LineClass::Fence {
            language: (!language.is_empty()).then_some(language),
        };
    }

    if is_table_row(trimmed) || (in_table && is_table_separator(trimmed)) {
        return LineClass::TableRow;
    }

    if let Some(caps) = HEADING_RE.captures(trimmed) {
        let hashes = caps.get(1).map(|m| m.as_str()).unwrap_or("#");
        let text = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        return LineClass::Heading {
            level: hashes.len() as u8,
            text,
        };
    }

    if let Some(caps) = QUOTE_RE.captures(trimmed) {
        let text = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        return LineClass::Quote { text };
    }

    if let Some(caps) = UNORDERED_RE.captures(trimmed) {
        let text = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        return LineClass::ListItem {
            kind: ListKind::Unordered,
            text,
        };
    }

    if let Some(caps) = ORDERED_RE.captures(trimmed) {
        let text = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        return LineClass::ListItem {
            kind: ListKind::Ordered,
            text,
        };
    }

    if trimmed.is_empty() {
        LineClass::Blank
    } else {
        LineClass::Text
    }
}
