//! Inline span resolution.
//!
//! This module turns the literal text of one block (or list item, or table
//! cell line) into a sequence of typed spans. Five independent regex scans
//! collect bold-italic, bold, italic, inline code, and link candidates; the
//! candidates are merged by start offset and the first non-overlapping ones
//! win. Bold and italic content is resolved again recursively, inline code
//! and links are taken literally.

use chatmark_core::{select_first_wins, Ranged};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::LazyLock;

/// Default cap on bold/italic nesting.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Regex for bold italic: ***text***
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());

/// Regex for bold: **text**
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Regex for italic: *text*
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Regex for inline code: `code`
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Regex for links: [label](url)
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// One resolved inline span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineSpan {
    /// Plain text
    PlainText(String),
    /// Bold text, content resolved again
    Bold(Vec<InlineSpan>),
    /// Italic text, content resolved again
    Italic(Vec<InlineSpan>),
    /// Bold and italic text, content resolved again
    BoldItalic(Vec<InlineSpan>),
    /// Inline code, literal
    InlineCode(String),
    /// A link, label taken literally
    Link { label: String, url: String },
}

impl InlineSpan {
    /// Create a plain text span.
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::PlainText(s.into())
    }

    /// The text this span displays, with markup delimiters removed.
    ///
    /// Links display their label.
    pub fn display_text(&self) -> String {
        let mut out = String::new();
        self.push_display_text(&mut out);
        out
    }

    fn push_display_text(&self, out: &mut String) {
        match self {
            InlineSpan::PlainText(s) | InlineSpan::InlineCode(s) => out.push_str(s),
            InlineSpan::Bold(children)
            | InlineSpan::Italic(children)
            | InlineSpan::BoldItalic(children) => {
                for child in children {
                    child.push_display_text(out);
                }
            }
            InlineSpan::Link { label, .. } => out.push_str(label),
        }
    }

    /// Whether this span carries any formatting.
    pub fn is_plain(&self) -> bool {
        matches!(self, InlineSpan::PlainText(_))
    }
}

/// Concatenated display text of a span sequence.
pub fn display_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::display_text).collect()
}

/// Markup kinds, in scan priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    BoldItalic,
    Bold,
    Italic,
    Code,
    Link,
}

/// A regex match waiting for overlap resolution.
#[derive(Debug, Clone)]
struct Candidate {
    markup: Markup,
    whole: Range<usize>,
    content: Range<usize>,
    url: Option<Range<usize>>,
}

impl Ranged for Candidate {
    fn range(&self) -> Range<usize> {
        self.whole.clone()
    }
}

/// Scans in priority order; the stable sort keeps this order for ties.
static SCANS: LazyLock<[(Markup, &'static Regex); 5]> = LazyLock::new(|| {
    [
        (Markup::BoldItalic, &*BOLD_ITALIC_RE),
        (Markup::Bold, &*BOLD_RE),
        (Markup::Italic, &*ITALIC_RE),
        (Markup::Code, &*CODE_RE),
        (Markup::Link, &*LINK_RE),
    ]
});

fn collect_candidates(text: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (markup, regex) in SCANS.iter() {
        for caps in regex.captures_iter(text) {
            let (Some(whole), Some(content)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            candidates.push(Candidate {
                markup: *markup,
                whole: whole.range(),
                content: content.range(),
                url: caps.get(2).map(|m| m.range()),
            });
        }
    }

    candidates
}

/// Inline span resolver.
///
/// Stateless apart from its nesting cap, so one resolver can be shared
/// across blocks and threads.
#[derive(Debug, Clone, Copy)]
pub struct InlineResolver {
    max_depth: usize,
}

impl Default for InlineResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineResolver {
    /// Create a resolver with the default nesting cap.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a resolver with a specific nesting cap.
    ///
    /// Content nested deeper than the cap is kept as plain text.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    /// The nesting cap.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Resolve `text` into spans.
    ///
    /// Empty input yields no spans; any other input yields at least one.
    pub fn resolve(&self, text: &str) -> Vec<InlineSpan> {
        self.resolve_at(text, 0)
    }

    fn resolve_at(&self, text: &str, depth: usize) -> Vec<InlineSpan> {
        if text.is_empty() {
            return Vec::new();
        }
        if depth >= self.max_depth {
            debug!("inline nesting cap {} reached, keeping text literal", self.max_depth);
            return vec![InlineSpan::text(text)];
        }

        let kept = select_first_wins(collect_candidates(text));
        if kept.is_empty() {
            return vec![InlineSpan::text(text)];
        }

        let mut spans = Vec::with_capacity(kept.len() * 2 + 1);
        let mut cursor = 0;

        for candidate in kept {
            if candidate.whole.start > cursor {
                spans.push(InlineSpan::text(&text[cursor..candidate.whole.start]));
            }

            let content = &text[candidate.content.clone()];
            let span = match candidate.markup {
                Markup::BoldItalic => InlineSpan::BoldItalic(self.resolve_at(content, depth + 1)),
                Markup::Bold => InlineSpan::Bold(self.resolve_at(content, depth + 1)),
                Markup::Italic => InlineSpan::Italic(self.resolve_at(content, depth + 1)),
                Markup::Code => InlineSpan::InlineCode(content.to_string()),
                Markup::Link => InlineSpan::Link {
                    label: content.to_string(),
                    url: candidate
                        .url
                        .map(|r| text[r].to_string())
                        .unwrap_or_default(),
                },
            };
            spans.push(span);
            cursor = candidate.whole.end;
        }

        if cursor < text.len() {
            spans.push(InlineSpan::text(&text[cursor..]));
        }

        spans
    }
}

/// Resolve inline markup in `text` with the default resolver.
///
/// # Example
///
/// ```
/// use chatmark_parser::{resolve_inline, InlineSpan};
///
/// let spans = resolve_inline("Hello **world**");
/// assert_eq!(
///     spans,
///     vec![
///         InlineSpan::text("Hello "),
///         InlineSpan::Bold(vec![InlineSpan::text("world")]),
///     ]
/// );
/// ```
pub fn resolve_inline(text: &str) -> Vec<InlineSpan> {
    InlineResolver::new().resolve(text)
}
