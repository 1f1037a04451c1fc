//! Chatmark Parser
//!
//! A streaming-safe markdown parser for chat transcripts. The caller hands
//! over the whole accumulated text on every update; the parser re-segments it
//! from scratch in one forward pass, so a half-written message always parses
//! to something sensible.
//!
//! # Overview
//!
//! - [`segment`] splits a document into an ordered list of [`Block`]s.
//! - [`BlockParser`] exposes the same pass one line at a time, reporting the
//!   source [`LineRange`] of every block.
//! - [`resolve_inline`] turns the text of a block into [`InlineSpan`]s.
//!
//! # Example
//!
//! ```
//! use chatmark_parser::{segment, Block};
//!
//! let blocks = segment("# Hello\n\n- a\n- b");
//! assert_eq!(
//!     blocks,
//!     vec![
//!         Block::Heading { level: 1, text: "Hello".to_string() },
//!         Block::UnorderedList { items: vec!["a".to_string(), "b".to_string()] },
//!     ]
//! );
//! ```

pub mod classify;
pub mod inline;
pub mod table;

pub use classify::{classify, LineClass};
pub use inline::{display_text, resolve_inline, InlineResolver, InlineSpan, DEFAULT_MAX_DEPTH};
pub use table::{split_cell_lines, split_cells};

use chatmark_core::{BlockKind, LineRange, ListKind, Located, ScanState};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Heading, level 1 to 4
    Heading { level: u8, text: String },
    /// One line of plain text
    Paragraph { text: String },
    /// One `>` line
    BlockQuote { text: String },
    /// Consecutive `-`/`*`/`+` items
    UnorderedList { items: Vec<String> },
    /// Consecutive `N.` items
    OrderedList { items: Vec<String> },
    /// Pipe table
    Table {
        header_cells: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Fenced code, lines kept verbatim
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
}

impl Block {
    /// The kind of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::BlockQuote { .. } => BlockKind::BlockQuote,
            Block::UnorderedList { .. } => BlockKind::UnorderedList,
            Block::OrderedList { .. } => BlockKind::OrderedList,
            Block::Table { .. } => BlockKind::Table,
            Block::CodeBlock { .. } => BlockKind::CodeBlock,
        }
    }

    fn list(kind: ListKind, items: Vec<String>) -> Self {
        match kind {
            ListKind::Unordered => Block::UnorderedList { items },
            ListKind::Ordered => Block::OrderedList { items },
        }
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Line-at-a-time block segmenter.
///
/// Feed lines with [`parse_line`](Self::parse_line) and close the document
/// with [`finalize`](Self::finalize). Each call returns the blocks completed
/// by that line, in source order.
#[derive(Debug, Default)]
pub struct BlockParser {
    state: ScanState,
    line_no: usize,
}

impl BlockParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// The open accumulator.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Number of lines consumed so far.
    pub fn lines_consumed(&self) -> usize {
        self.line_no
    }

    /// Parse a single line and return the blocks it completes.
    ///
    /// A trailing `\r` is ignored.
    pub fn parse_line(&mut self, line: &str) -> Vec<Located<Block>> {
        let n = self.line_no;
        self.line_no += 1;

        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = line.trim();
        let mut out = Vec::new();

        // Fenced code suppresses every other rule until its closing fence
        if self.state.is_in_code() {
            if classify::is_fence(trimmed) {
                self.flush(n + 1, &mut out);
            } else {
                self.state.push_code_line(line.to_string());
            }
            return out;
        }

        match classify(trimmed, self.state.is_in_table()) {
            LineClass::Fence { language } => {
                self.flush(n, &mut out);
                trace!("line {}: code fence opened ({:?})", n, language);
                self.state.enter_code_block(n, language.map(str::to_string));
            }
            LineClass::TableRow => {
                if !self.state.is_in_table() {
                    self.flush(n, &mut out);
                }
                self.state.push_table_row(n, trimmed.to_string());
            }
            LineClass::Heading { level, text } => {
                self.flush(n, &mut out);
                if !text.is_empty() {
                    out.push(Located::new(
                        Block::Heading {
                            level,
                            text: text.to_string(),
                        },
                        LineRange::single(n),
                    ));
                }
            }
            LineClass::Quote { text } => {
                self.flush(n, &mut out);
                if !text.trim().is_empty() {
                    out.push(Located::new(
                        Block::BlockQuote {
                            text: text.to_string(),
                        },
                        LineRange::single(n),
                    ));
                }
            }
            LineClass::ListItem { kind, text } => {
                if self.state.open_list() != Some(kind) {
                    self.flush(n, &mut out);
                }
                self.state.push_list_item(kind, n, text.to_string());
            }
            LineClass::Blank => self.flush(n, &mut out),
            LineClass::Text => {
                self.flush(n, &mut out);
                out.push(Located::new(
                    Block::Paragraph {
                        text: trimmed.to_string(),
                    },
                    LineRange::single(n),
                ));
            }
        }

        out
    }

    /// Parse a complete document.
    pub fn parse_document(&mut self, content: &str) -> Vec<Located<Block>> {
        let mut blocks = Vec::new();
        for line in content.split('\n') {
            blocks.extend(self.parse_line(line));
        }
        blocks.extend(self.finalize());
        blocks
    }

    /// Finalize parsing, flushing whatever is still open.
    ///
    /// An unterminated code fence still yields its accumulated lines.
    pub fn finalize(&mut self) -> Vec<Located<Block>> {
        let mut out = Vec::new();
        let end = self.line_no;
        self.flush(end, &mut out);
        out
    }

    /// Reset the parser to initial state.
    pub fn reset(&mut self) {
        self.state = ScanState::default();
        self.line_no = 0;
    }

    /// Close the open accumulator; `end` is the first line not covered.
    fn flush(&mut self, end: usize, out: &mut Vec<Located<Block>>) {
        match self.state.take() {
            ScanState::Normal => {}
            ScanState::InList { kind, start, items } => {
                debug!("flushing {} list of {} items", kind, items.len());
                out.push(Located::new(
                    Block::list(kind, items),
                    LineRange::new(start, end),
                ));
            }
            ScanState::InTable { start, rows } => flush_table(start, rows, end, out),
            ScanState::InCodeBlock {
                start,
                language,
                lines,
            } => {
                debug!("flushing code block of {} lines", lines.len());
                out.push(Located::new(
                    Block::CodeBlock { language, lines },
                    LineRange::new(start, end),
                ));
            }
        }
    }
}

/// Turn an accumulated table run into a block.
///
/// Row 0 is the header and row 1 the separator. A run that cannot form a
/// table (fewer than two rows, or no header cells) falls back to one
/// paragraph per row.
fn flush_table(start: usize, rows: Vec<String>, end: usize, out: &mut Vec<Located<Block>>) {
    let header_cells = rows.first().map(|r| split_cells(r)).unwrap_or_default();

    if rows.len() < 2 || header_cells.iter().all(String::is_empty) {
        debug!(
            "table run at line {} has {} rows, re-classifying as paragraphs",
            start,
            rows.len()
        );
        for (i, row) in rows.into_iter().enumerate() {
            out.push(Located::new(
                Block::Paragraph { text: row },
                LineRange::single(start + i),
            ));
        }
        return;
    }

    let body = rows.iter().skip(2).map(|r| split_cells(r)).collect();
    out.push(Located::new(
        Block::Table {
            header_cells,
            rows: body,
        },
        LineRange::new(start, end),
    ));
}

/// Segment a document into blocks.
///
/// Total and deterministic: every input, however malformed, yields a block
/// list; blank lines only separate blocks.
pub fn segment(document: &str) -> Vec<Block> {
    segment_located(document)
        .into_iter()
        .map(Located::into_inner)
        .collect()
}

/// Segment a document, keeping each block's source line range.
pub fn segment_located(document: &str) -> Vec<Located<Block>> {
    BlockParser::new().parse_document(document)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_parse_heading() {
        assert_eq!(
            segment("# Hello World"),
            vec![Block::Heading {
                level: 1,
                text: s("Hello World")
            }]
        );
    }

    #[test]
    fn test_heading_levels_capped_at_four() {
        let blocks = segment("# a\n## b\n### c\n#### d\n##### e");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| match b {
                Block::Heading { level, .. } => *level,
                _ => 0,
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_marker_only_heading_emits_nothing() {
        assert!(segment("##").is_empty());
    }

    #[test]
    fn test_code_fence_precedence() {
        let blocks = segment("```js\n# not a heading\nconsole.log(1)\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: Some(s("js")),
                lines: strings(&["# not a heading", "console.log(1)"]),
            }]
        );
    }

    #[test]
    fn test_code_lines_kept_verbatim() {
        let blocks = segment("```\n    indented\n\n- not a list\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: None,
                lines: strings(&["    indented", "", "- not a list"]),
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_flushes() {
        let blocks = segment("text\n```python\nprint(1)");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph { text: s("text") },
                Block::CodeBlock {
                    language: Some(s("python")),
                    lines: strings(&["print(1)"]),
                },
            ]
        );
    }

    #[test]
    fn test_fence_flushes_open_list() {
        let blocks = segment("- a\n```\nx\n```");
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList {
                    items: strings(&["a"])
                },
                Block::CodeBlock {
                    language: None,
                    lines: strings(&["x"]),
                },
            ]
        );
    }

    #[test]
    fn test_list_flush_on_blank() {
        let blocks = segment("- a\n- b\n\n1. x\n1. y");
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList {
                    items: strings(&["a", "b"])
                },
                Block::OrderedList {
                    items: strings(&["x", "y"])
                },
            ]
        );
    }

    #[test]
    fn test_list_type_switch_flushes() {
        let blocks = segment("- a\n1. b\n+ c");
        assert_eq!(
            blocks,
            vec![
                Block::UnorderedList {
                    items: strings(&["a"])
                },
                Block::OrderedList {
                    items: strings(&["b"])
                },
                Block::UnorderedList {
                    items: strings(&["c"])
                },
            ]
        );
    }

    #[test]
    fn test_mixed_bullets_share_one_list() {
        let blocks = segment("- a\n* b\n+ c");
        assert_eq!(
            blocks,
            vec![Block::UnorderedList {
                items: strings(&["a", "b", "c"])
            }]
        );
    }

    #[test]
    fn test_parse_table() {
        let blocks = segment("|A|B|\n|-|-|\n|1|2|");
        assert_eq!(
            blocks,
            vec![Block::Table {
                header_cells: strings(&["A", "B"]),
                rows: vec![strings(&["1", "2"])],
            }]
        );
    }

    #[test]
    fn test_table_ends_on_text() {
        let blocks = segment("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\nafter");
        assert_eq!(
            blocks,
            vec![
                Block::Table {
                    header_cells: strings(&["A", "B"]),
                    rows: vec![strings(&["1", "2"]), strings(&["3", "4"])],
                },
                Block::Paragraph { text: s("after") },
            ]
        );
    }

    #[test]
    fn test_header_only_table() {
        let blocks = segment("|A|B|\n|---|---|");
        assert_eq!(
            blocks,
            vec![Block::Table {
                header_cells: strings(&["A", "B"]),
                rows: vec![],
            }]
        );
    }

    #[test]
    fn test_single_row_table_becomes_paragraph() {
        let blocks = segment("|only one row|");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                text: s("|only one row|")
            }]
        );
    }

    #[test]
    fn test_blank_header_table_becomes_paragraphs() {
        let located = segment_located("| |\n|-|");
        assert_eq!(
            located,
            vec![
                Located::new(Block::Paragraph { text: s("| |") }, LineRange::single(0)),
                Located::new(Block::Paragraph { text: s("|-|") }, LineRange::single(1)),
            ]
        );
    }

    #[test]
    fn test_table_flushes_list() {
        let blocks = segment("- a\n|A|B|\n|-|-|");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind(), BlockKind::UnorderedList);
        assert_eq!(blocks[1].kind(), BlockKind::Table);
    }

    #[test]
    fn test_parse_blockquote() {
        assert_eq!(
            segment("> Quote text\n> second"),
            vec![
                Block::BlockQuote {
                    text: s("Quote text")
                },
                Block::BlockQuote { text: s("second") },
            ]
        );
    }

    #[test]
    fn test_empty_blockquote_emits_nothing() {
        assert!(segment(">").is_empty());
        assert!(segment(">   ").is_empty());
    }

    #[test]
    fn test_paragraphs_not_merged() {
        assert_eq!(
            segment("first\nsecond"),
            vec![
                Block::Paragraph { text: s("first") },
                Block::Paragraph { text: s("second") },
            ]
        );
    }

    #[test]
    fn test_paragraph_flushes_list() {
        assert_eq!(
            segment("- a\ntext"),
            vec![
                Block::UnorderedList {
                    items: strings(&["a"])
                },
                Block::Paragraph { text: s("text") },
            ]
        );
    }

    #[test]
    fn test_indented_lines_classified_trimmed() {
        assert_eq!(
            segment("   ## Title  \n  - item"),
            vec![
                Block::Heading {
                    level: 2,
                    text: s("Title")
                },
                Block::UnorderedList {
                    items: strings(&["item"])
                },
            ]
        );
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            segment("# T\r\n```\r\ncode\r\n```\r\n"),
            vec![
                Block::Heading {
                    level: 1,
                    text: s("T")
                },
                Block::CodeBlock {
                    language: None,
                    lines: strings(&["code"]),
                },
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n   \n").is_empty());
    }

    #[test]
    fn test_line_ranges() {
        let located = segment_located("# T\n\n- a\n- b\n\n|A|B|\n|-|-|\n|1|2|\n```\nc\n```");
        let ranges: Vec<LineRange> = located.iter().map(|b| b.lines).collect();
        assert_eq!(
            ranges,
            vec![
                LineRange::new(0, 1),
                LineRange::new(2, 4),
                LineRange::new(5, 8),
                LineRange::new(8, 11),
            ]
        );
    }

    #[test]
    fn test_streaming_parse_line() {
        let mut parser = BlockParser::new();
        assert!(parser.parse_line("- a").is_empty());
        assert!(parser.parse_line("- b").is_empty());
        let flushed = parser.parse_line("");
        assert_eq!(flushed.len(), 1);
        assert_eq!(flushed[0].lines, LineRange::new(0, 2));

        assert!(parser.parse_line("```").is_empty());
        assert!(parser.parse_line("code").is_empty());
        let closed = parser.finalize();
        assert_eq!(
            closed[0].value,
            Block::CodeBlock {
                language: None,
                lines: strings(&["code"]),
            }
        );
        assert_eq!(parser.lines_consumed(), 5);

        parser.reset();
        assert_eq!(parser.lines_consumed(), 0);
        assert!(!parser.state().is_in_code());
    }

    #[test]
    fn test_idempotent() {
        let doc = "# T\n- a\n|A|B|\n|-|-|\n```\nx";
        assert_eq!(segment(doc), segment(doc));
    }
}
