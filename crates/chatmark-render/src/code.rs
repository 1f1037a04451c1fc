//! Code block view.
//!
//! A fenced code block ready for display: per-line highlight tokens, an
//! optional line-number gutter, and the undecorated text for copying.

use chatmark_ansi::codes::{bg_color, fg_color, FGRESET, RESET};
use chatmark_ansi::{sanitize_for_terminal, visible_length, DIM};
use chatmark_config::Palette;
use chatmark_syntax::{Highlighter, Token, TokenKind};
use serde::Serialize;

/// Separator between the gutter and the code.
pub const GUTTER_SEPARATOR: &str = " │ ";

/// One line of a code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLine {
    /// 1-based line number
    pub number: usize,
    /// Original text
    pub text: String,
    pub tokens: Vec<Token>,
}

/// A highlighted code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlockView {
    pub language: Option<String>,
    /// Whether the gutter is shown
    pub line_numbers: bool,
    pub lines: Vec<CodeLine>,
}

impl CodeBlockView {
    /// Tag each line of a code block.
    pub fn new(
        language: Option<String>,
        lines: Vec<String>,
        highlighter: &Highlighter,
        line_numbers: bool,
    ) -> Self {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| CodeLine {
                number: i + 1,
                tokens: highlighter.highlight_line(&text),
                text,
            })
            .collect();
        Self {
            language,
            line_numbers,
            lines,
        }
    }

    /// Columns taken by the widest line number, or 0 without a gutter.
    pub fn gutter_width(&self) -> usize {
        if self.line_numbers {
            self.lines.len().max(1).to_string().len()
        } else {
            0
        }
    }

    /// Right-aligned gutter label for a line, empty without a gutter.
    pub fn gutter_label(&self, line: &CodeLine) -> String {
        if self.line_numbers {
            format!("{:>width$}", line.number, width = self.gutter_width())
        } else {
            String::new()
        }
    }

    /// The original lines joined with `\n`, free of any decoration.
    pub fn copy_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Foreground color for a token kind.
pub fn token_color(kind: TokenKind, palette: &Palette) -> (u8, u8, u8) {
    match kind {
        TokenKind::Comment => palette.comment,
        TokenKind::String => palette.string,
        TokenKind::Keyword | TokenKind::Tag => palette.keyword,
        TokenKind::Builtin | TokenKind::Attribute => palette.builtin,
        TokenKind::Number => palette.number,
    }
}

/// Render a code block for the terminal.
///
/// Each line gets the code background across `width` columns. A dimmed
/// language label precedes the block when one was declared.
pub fn render_code_block(
    view: &CodeBlockView,
    width: usize,
    left_margin: &str,
    palette: &Palette,
) -> Vec<String> {
    let bg = bg_color(palette.code_background);
    let mut out = Vec::with_capacity(view.lines.len() + 1);

    if let Some(language) = &view.language {
        out.push(format!(
            "{}{}",
            left_margin,
            DIM.wrap(&sanitize_for_terminal(language))
        ));
    }

    for line in &view.lines {
        let mut rendered = String::new();
        if view.line_numbers {
            rendered.push_str(&fg_color(palette.gutter));
            rendered.push_str(&view.gutter_label(line));
            rendered.push_str(GUTTER_SEPARATOR);
            rendered.push_str(FGRESET);
        }
        rendered.push_str(&fg_color(palette.code));
        for token in &line.tokens {
            let text = sanitize_for_terminal(&token.text);
            match token.kind {
                Some(kind) => {
                    rendered.push_str(&fg_color(token_color(kind, palette)));
                    rendered.push_str(&text);
                    rendered.push_str(&fg_color(palette.code));
                }
                None => rendered.push_str(&text),
            }
        }
        let padding = width.saturating_sub(visible_length(&rendered));
        out.push(format!(
            "{}{}{}{}{}",
            left_margin,
            bg,
            rendered,
            " ".repeat(padding),
            RESET
        ));
    }

    out
}
