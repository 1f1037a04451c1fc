//! Core enums for chatmark block classification.

use serde::{Deserialize, Serialize};

/// The kind of a block node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// `#`..`####` heading
    Heading,
    /// Plain line of text
    Paragraph,
    /// `>` line
    BlockQuote,
    /// Run of `-`, `*` or `+` items
    UnorderedList,
    /// Run of `1.` style items
    OrderedList,
    /// Pipe table
    Table,
    /// Fenced code
    CodeBlock,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Heading => write!(f, "heading"),
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::BlockQuote => write!(f, "blockquote"),
            BlockKind::UnorderedList => write!(f, "unordered_list"),
            BlockKind::OrderedList => write!(f, "ordered_list"),
            BlockKind::Table => write!(f, "table"),
            BlockKind::CodeBlock => write!(f, "code_block"),
        }
    }
}

/// Represents the type of list being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Unordered list with bullets (*, -, +)
    Unordered,
    /// Ordered list with numbers (1., 2., etc.)
    Ordered,
}

impl ListKind {
    /// The block kind a flushed list of this type becomes.
    pub fn block_kind(self) -> BlockKind {
        match self {
            ListKind::Unordered => BlockKind::UnorderedList,
            ListKind::Ordered => BlockKind::OrderedList,
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Unordered => write!(f, "unordered"),
            ListKind::Ordered => write!(f, "ordered"),
        }
    }
}
