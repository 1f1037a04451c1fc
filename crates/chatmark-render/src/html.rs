//! HTML writer.
//!
//! Produces an HTML fragment. All text is escaped; code tokens become
//! `<span class="token KIND">` and the gutter `<span class="line-number">`.

use crate::code::CodeBlockView;
use crate::{Cell, RenderBlock, RenderTree};
use chatmark_ansi::is_safe_url;
use chatmark_parser::InlineSpan;
use std::fmt::{self, Write};

/// Escape text for HTML content and attribute values.
pub fn escape_html(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Writes render trees as HTML.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a whole tree, one block per line.
    pub fn render_tree(mut self, tree: &RenderTree) -> String {
        for block in &tree.blocks {
            // String as fmt::Write is infallible
            let _ = self.write_block(block);
            self.out.push('\n');
        }
        self.out
    }

    /// Render a single block, without a trailing newline.
    pub fn render_block(block: &RenderBlock) -> String {
        let mut writer = Self::new();
        let _ = writer.write_block(block);
        writer.out
    }

    fn text(&mut self, text: &str) {
        escape_html(&mut self.out, text);
    }

    fn write_block(&mut self, block: &RenderBlock) -> fmt::Result {
        match block {
            RenderBlock::Heading { level, spans } => {
                write!(self.out, "<h{}>", level)?;
                self.write_spans(spans)?;
                write!(self.out, "</h{}>", level)
            }
            RenderBlock::Paragraph { spans } => {
                self.out.push_str("<p>");
                self.write_spans(spans)?;
                self.out.push_str("</p>");
                Ok(())
            }
            RenderBlock::BlockQuote { spans } => {
                self.out.push_str("<blockquote>");
                self.write_spans(spans)?;
                self.out.push_str("</blockquote>");
                Ok(())
            }
            RenderBlock::UnorderedList { items } => self.write_list("ul", items),
            RenderBlock::OrderedList { items } => self.write_list("ol", items),
            RenderBlock::Table { header, rows } => {
                self.out.push_str("<table><thead><tr>");
                for cell in header {
                    self.write_cell("th", cell)?;
                }
                self.out.push_str("</tr></thead><tbody>");
                for row in rows {
                    self.out.push_str("<tr>");
                    for cell in row {
                        self.write_cell("td", cell)?;
                    }
                    self.out.push_str("</tr>");
                }
                self.out.push_str("</tbody></table>");
                Ok(())
            }
            RenderBlock::CodeBlock(view) => self.write_code(view),
        }
    }

    fn write_list(&mut self, tag: &str, items: &[Vec<InlineSpan>]) -> fmt::Result {
        write!(self.out, "<{}>", tag)?;
        for item in items {
            self.out.push_str("<li>");
            self.write_spans(item)?;
            self.out.push_str("</li>");
        }
        write!(self.out, "</{}>", tag)
    }

    fn write_cell(&mut self, tag: &str, cell: &Cell) -> fmt::Result {
        write!(self.out, "<{}>", tag)?;
        for (i, line) in cell.iter().enumerate() {
            if i > 0 {
                self.out.push_str("<br>");
            }
            self.write_spans(line)?;
        }
        write!(self.out, "</{}>", tag)
    }

    fn write_spans(&mut self, spans: &[InlineSpan]) -> fmt::Result {
        for span in spans {
            match span {
                InlineSpan::PlainText(text) => self.text(text),
                InlineSpan::Bold(children) => {
                    self.out.push_str("<strong>");
                    self.write_spans(children)?;
                    self.out.push_str("</strong>");
                }
                InlineSpan::Italic(children) => {
                    self.out.push_str("<em>");
                    self.write_spans(children)?;
                    self.out.push_str("</em>");
                }
                InlineSpan::BoldItalic(children) => {
                    self.out.push_str("<strong><em>");
                    self.write_spans(children)?;
                    self.out.push_str("</em></strong>");
                }
                InlineSpan::InlineCode(code) => {
                    self.out.push_str("<code>");
                    self.text(code);
                    self.out.push_str("</code>");
                }
                InlineSpan::Link { label, url } if is_safe_url(url) => {
                    self.out.push_str("<a href=\"");
                    self.text(url);
                    self.out.push_str("\">");
                    self.text(label);
                    self.out.push_str("</a>");
                }
                InlineSpan::Link { label, .. } => self.text(label),
            }
        }
        Ok(())
    }

    fn write_code(&mut self, view: &CodeBlockView) -> fmt::Result {
        self.out.push_str("<pre><code");
        if let Some(language) = &view.language {
            self.out.push_str(" class=\"language-");
            self.text(language);
            self.out.push('"');
        }
        self.out.push('>');

        for (i, line) in view.lines.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            if view.line_numbers {
                write!(
                    self.out,
                    "<span class=\"line-number\">{}</span>",
                    view.gutter_label(line)
                )?;
            }
            for token in &line.tokens {
                match token.kind {
                    Some(kind) => {
                        write!(self.out, "<span class=\"token {}\">", kind.css_class())?;
                        self.text(&token.text);
                        self.out.push_str("</span>");
                    }
                    None => self.text(&token.text),
                }
            }
        }

        self.out.push_str("</code></pre>");
        Ok(())
    }
}
