//! Chatmark Render
//!
//! Turns the full accumulated text of a chat message into a [`RenderTree`]:
//! blocks from the segmenter, with every text-bearing leaf resolved into
//! inline spans and every code block tagged for highlighting.
//!
//! The tree is then written by one of the writers:
//!
//! - [`TerminalWriter`] - ANSI-styled terminal output
//! - [`HtmlWriter`] - escaped HTML fragments
//! - [`to_json`] - deterministic JSON, used for snapshots
//!
//! # Example
//!
//! ```
//! use chatmark_render::{render, RenderBlock};
//! use chatmark_parser::InlineSpan;
//!
//! let tree = render("Some **bold** text");
//! assert_eq!(
//!     tree.blocks,
//!     vec![RenderBlock::Paragraph {
//!         spans: vec![
//!             InlineSpan::text("Some "),
//!             InlineSpan::Bold(vec![InlineSpan::text("bold")]),
//!             InlineSpan::text(" text"),
//!         ],
//!     }]
//! );
//! ```

pub mod code;
pub mod features;
pub mod heading;
pub mod html;
pub mod json;
pub mod list;
pub mod stream;
pub mod table;
pub mod terminal;
pub mod text;

pub use code::{CodeBlockView, CodeLine};
pub use features::{
    copy_code, is_tty, terminal_width, Clipboard, CopyStatus, Osc52Clipboard,
    MAX_CLIPBOARD_SIZE,
};
pub use html::HtmlWriter;
pub use json::{to_json, to_json_value};
pub use stream::StreamBuffer;
pub use terminal::TerminalWriter;

use chatmark_config::FeaturesConfig;
use chatmark_parser::{
    segment_located, split_cell_lines, Block, InlineResolver, InlineSpan, DEFAULT_MAX_DEPTH,
};
use chatmark_syntax::Highlighter;
use serde::Serialize;

/// One table cell: its `<br>`-separated lines, each resolved separately.
pub type Cell = Vec<Vec<InlineSpan>>;

/// A block with its text resolved into spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderBlock {
    Heading { level: u8, spans: Vec<InlineSpan> },
    Paragraph { spans: Vec<InlineSpan> },
    BlockQuote { spans: Vec<InlineSpan> },
    UnorderedList { items: Vec<Vec<InlineSpan>> },
    OrderedList { items: Vec<Vec<InlineSpan>> },
    Table { header: Vec<Cell>, rows: Vec<Vec<Cell>> },
    CodeBlock(CodeBlockView),
}

/// The rendered form of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    pub blocks: Vec<RenderBlock>,
}

impl RenderTree {
    /// All code blocks in document order.
    pub fn code_blocks(&self) -> impl Iterator<Item = &CodeBlockView> {
        self.blocks.iter().filter_map(|block| match block {
            RenderBlock::CodeBlock(view) => Some(view),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Render options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number code block lines
    pub line_numbers: bool,
    /// Tag code block tokens
    pub highlight: bool,
    /// Emphasis nesting limit
    pub max_inline_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            highlight: true,
            max_inline_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<&FeaturesConfig> for RenderOptions {
    fn from(features: &FeaturesConfig) -> Self {
        Self {
            line_numbers: features.line_numbers,
            highlight: features.highlight,
            max_inline_depth: features.max_inline_depth,
        }
    }
}

/// Builds render trees.
///
/// Stateless between calls: every call re-segments the whole text.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
    resolver: InlineResolver,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            resolver: InlineResolver::with_max_depth(options.max_inline_depth),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the full text of a message.
    pub fn render(&self, full_text: &str) -> RenderTree {
        let blocks = segment_located(full_text)
            .into_iter()
            .map(|located| self.render_block(located.value))
            .collect();
        RenderTree { blocks }
    }

    /// Resolve one block.
    pub fn render_block(&self, block: Block) -> RenderBlock {
        match block {
            Block::Heading { level, text } => RenderBlock::Heading {
                level,
                spans: self.resolver.resolve(&text),
            },
            Block::Paragraph { text } => RenderBlock::Paragraph {
                spans: self.resolver.resolve(&text),
            },
            Block::BlockQuote { text } => RenderBlock::BlockQuote {
                spans: self.resolver.resolve(&text),
            },
            Block::UnorderedList { items } => RenderBlock::UnorderedList {
                items: self.resolve_all(&items),
            },
            Block::OrderedList { items } => RenderBlock::OrderedList {
                items: self.resolve_all(&items),
            },
            Block::Table { header_cells, rows } => RenderBlock::Table {
                header: header_cells.iter().map(|c| self.resolve_cell(c)).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|c| self.resolve_cell(c)).collect())
                    .collect(),
            },
            Block::CodeBlock { language, lines } => {
                let highlighter = if self.options.highlight {
                    Highlighter::for_language(language.as_deref())
                } else {
                    Highlighter::plain()
                };
                RenderBlock::CodeBlock(CodeBlockView::new(
                    language,
                    lines,
                    &highlighter,
                    self.options.line_numbers,
                ))
            }
        }
    }

    fn resolve_all(&self, items: &[String]) -> Vec<Vec<InlineSpan>> {
        items.iter().map(|item| self.resolver.resolve(item)).collect()
    }

    fn resolve_cell(&self, cell: &str) -> Cell {
        split_cell_lines(cell)
            .into_iter()
            .map(|line| self.resolver.resolve(line))
            .collect()
    }
}

/// Render with default options.
pub fn render(full_text: &str) -> RenderTree {
    Renderer::default().render(full_text)
}
