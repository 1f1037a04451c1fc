//! Scan state for the block segmenter.
//!
//! The segmenter walks a document line by line. At any position at most one
//! accumulator is open: an unordered list, an ordered list, a table, or a
//! fenced code block. [`ScanState`] holds that as a small state machine;
//! every transition is a move between variants.

use crate::enums::ListKind;
use crate::types::LineRange;
use serde::{Deserialize, Serialize};

/// The fieldless mode of a [`ScanState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanMode {
    /// Nothing open
    Normal,
    /// Accumulating `- item` lines
    InUnorderedList,
    /// Accumulating `1. item` lines
    InOrderedList,
    /// Accumulating pipe-table rows
    InTable,
    /// Inside a fence; every line is literal
    InCodeBlock,
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanMode::Normal => write!(f, "normal"),
            ScanMode::InUnorderedList => write!(f, "unordered_list"),
            ScanMode::InOrderedList => write!(f, "ordered_list"),
            ScanMode::InTable => write!(f, "table"),
            ScanMode::InCodeBlock => write!(f, "code_block"),
        }
    }
}

/// Open accumulator of the block segmenter.
///
/// Each variant records the first source line it covers so that the flushed
/// block can report its [`LineRange`].
///
/// # Example
///
/// ```
/// use chatmark_core::{ListKind, ScanMode, ScanState};
///
/// let mut state = ScanState::default();
/// state.push_list_item(ListKind::Unordered, 0, "a".to_string());
/// state.push_list_item(ListKind::Unordered, 1, "b".to_string());
/// assert_eq!(state.mode(), ScanMode::InUnorderedList);
///
/// let open = state.take();
/// assert_eq!(open.mode(), ScanMode::InUnorderedList);
/// assert_eq!(state.mode(), ScanMode::Normal);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Nothing open
    #[default]
    Normal,
    /// Open list of one kind
    InList {
        /// Which list type is open
        kind: ListKind,
        /// Line of the first item
        start: usize,
        /// Item text, markers stripped
        items: Vec<String>,
    },
    /// Open table run
    InTable {
        /// Line of the first row
        start: usize,
        /// Trimmed row lines, separator included
        rows: Vec<String>,
    },
    /// Open fenced code block
    InCodeBlock {
        /// Line of the opening fence
        start: usize,
        /// Declared language, `None` when the fence had none
        language: Option<String>,
        /// Verbatim content lines
        lines: Vec<String>,
    },
}

impl ScanState {
    /// The fieldless mode of this state.
    pub fn mode(&self) -> ScanMode {
        match self {
            ScanState::Normal => ScanMode::Normal,
            ScanState::InList {
                kind: ListKind::Unordered,
                ..
            } => ScanMode::InUnorderedList,
            ScanState::InList {
                kind: ListKind::Ordered,
                ..
            } => ScanMode::InOrderedList,
            ScanState::InTable { .. } => ScanMode::InTable,
            ScanState::InCodeBlock { .. } => ScanMode::InCodeBlock,
        }
    }

    /// Move the open accumulator out, leaving `Normal` behind.
    pub fn take(&mut self) -> ScanState {
        std::mem::take(self)
    }

    /// Check if currently inside a fenced code block.
    pub fn is_in_code(&self) -> bool {
        matches!(self, ScanState::InCodeBlock { .. })
    }

    /// Check if currently inside a table run.
    pub fn is_in_table(&self) -> bool {
        matches!(self, ScanState::InTable { .. })
    }

    /// The kind of the open list, if any.
    pub fn open_list(&self) -> Option<ListKind> {
        match self {
            ScanState::InList { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Append a list item.
    ///
    /// Only valid in `Normal` or in a list of the same kind; the segmenter
    /// flushes anything else first.
    pub fn push_list_item(&mut self, kind: ListKind, line: usize, item: String) {
        match self {
            ScanState::InList {
                kind: open, items, ..
            } if *open == kind => items.push(item),
            _ => {
                *self = ScanState::InList {
                    kind,
                    start: line,
                    items: vec![item],
                }
            }
        }
    }

    /// Append a table row, entering table mode if needed.
    pub fn push_table_row(&mut self, line: usize, row: String) {
        match self {
            ScanState::InTable { rows, .. } => rows.push(row),
            _ => {
                *self = ScanState::InTable {
                    start: line,
                    rows: vec![row],
                }
            }
        }
    }

    /// Open a fenced code block at `line`.
    pub fn enter_code_block(&mut self, line: usize, language: Option<String>) {
        *self = ScanState::InCodeBlock {
            start: line,
            language,
            lines: Vec::new(),
        };
    }

    /// Append a verbatim line to the open code block.
    ///
    /// Returns `false` (and does nothing) when no code block is open.
    pub fn push_code_line(&mut self, line: String) -> bool {
        match self {
            ScanState::InCodeBlock { lines, .. } => {
                lines.push(line);
                true
            }
            _ => false,
        }
    }

    /// First source line of the open accumulator.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            ScanState::Normal => None,
            ScanState::InList { start, .. }
            | ScanState::InTable { start, .. }
            | ScanState::InCodeBlock { start, .. } => Some(*start),
        }
    }

    /// Lines covered by the open accumulator when it is closed before `end`.
    pub fn span_until(&self, end: usize) -> Option<LineRange> {
        self.start_line().map(|start| LineRange::new(start, end))
    }
}
