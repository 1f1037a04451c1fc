//! ANSI terminal writer.

use crate::code::render_code_block;
use crate::heading::render_heading;
use crate::list::render_list;
use crate::table::render_table;
use crate::text::wrap_spans;
use crate::{RenderBlock, RenderTree};
use chatmark_ansi::codes::fg_color;
use chatmark_ansi::style::colored;
use chatmark_ansi::ITALIC;
use chatmark_config::Palette;
use chatmark_core::ListKind;
use std::io::{self, Write};

/// Writes render trees as styled terminal text.
pub struct TerminalWriter<W: Write> {
    writer: W,
    /// Total output width
    width: usize,
    margin: usize,
    palette: Palette,
    blocks_written: usize,
}

impl<W: Write> TerminalWriter<W> {
    /// Create a writer with the default palette and a margin of 2.
    pub fn new(writer: W, width: usize) -> Self {
        Self {
            writer,
            width,
            margin: 2,
            palette: Palette::default(),
            blocks_written: 0,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Width left for content after the margin.
    fn content_width(&self) -> usize {
        self.width.saturating_sub(self.margin).max(1)
    }

    /// Write every block of a tree.
    pub fn write_tree(&mut self, tree: &RenderTree) -> io::Result<()> {
        for block in &tree.blocks {
            self.write_block(block)?;
        }
        self.writer.flush()
    }

    /// Write one block.
    ///
    /// Headings, tables and code blocks are set off by a blank line from
    /// whatever came before them.
    pub fn write_block(&mut self, block: &RenderBlock) -> io::Result<()> {
        let spaced = matches!(
            block,
            RenderBlock::Heading { .. } | RenderBlock::Table { .. } | RenderBlock::CodeBlock(_)
        );
        if spaced && self.blocks_written > 0 {
            writeln!(self.writer)?;
        }
        for line in self.block_lines(block) {
            writeln!(self.writer, "{}", line)?;
        }
        self.blocks_written += 1;
        Ok(())
    }

    /// The rendered lines of one block, without trailing newlines.
    pub fn block_lines(&self, block: &RenderBlock) -> Vec<String> {
        let margin = " ".repeat(self.margin);
        let width = self.content_width();
        let palette = &self.palette;

        match block {
            RenderBlock::Heading { level, spans } => {
                render_heading(*level, spans, width, &margin, palette)
            }
            RenderBlock::Paragraph { spans } => wrap_spans(spans, "", width, palette)
                .into_iter()
                .map(|line| format!("{}{}", margin, line))
                .collect(),
            RenderBlock::BlockQuote { spans } => {
                let bar = colored(palette.quote, "│");
                let base = format!("{}{}", ITALIC.0, fg_color(palette.quote));
                wrap_spans(spans, &base, width.saturating_sub(2).max(1), palette)
                    .into_iter()
                    .map(|line| format!("{}{} {}", margin, bar, line))
                    .collect()
            }
            RenderBlock::UnorderedList { items } => {
                render_list(ListKind::Unordered, items, width, &margin, palette)
            }
            RenderBlock::OrderedList { items } => {
                render_list(ListKind::Ordered, items, width, &margin, palette)
            }
            RenderBlock::Table { header, rows } => {
                render_table(header, rows, width, &margin, palette)
            }
            RenderBlock::CodeBlock(view) => render_code_block(view, width, &margin, palette),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render a whole tree to a string.
pub fn render_to_string(tree: &RenderTree, width: usize, palette: Palette) -> String {
    let mut writer = TerminalWriter::new(Vec::new(), width).with_palette(palette);
    // Writing to a Vec cannot fail
    let _ = writer.write_tree(tree);
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}
