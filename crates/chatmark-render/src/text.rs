//! Inline span styling and word wrapping for the terminal.
//!
//! Spans are flattened into styled runs, runs into words, and words are
//! wrapped greedily. Every word carries its own escape codes so a wrapped
//! line never depends on styling opened on the line before.

use chatmark_ansi::codes::{fg_color, hyperlink, RESET};
use chatmark_ansi::{is_safe_url, sanitize_for_terminal, BOLD, ITALIC, UNDERLINE};
use chatmark_config::Palette;
use chatmark_parser::InlineSpan;
use unicode_width::UnicodeWidthStr;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Escape codes opening the style, empty for unstyled text
    pub open: String,
    pub text: String,
    /// Hyperlink target, if the run is a link label
    pub url: Option<String>,
}

impl StyledRun {
    fn render(&self, piece: &str) -> String {
        let body = match &self.url {
            Some(url) => hyperlink(url, piece),
            None => piece.to_string(),
        };
        if self.open.is_empty() {
            body
        } else {
            format!("{}{}{}", self.open, body, RESET)
        }
    }
}

/// A wrap unit: styled text and its display width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    pub rendered: String,
    pub width: usize,
}

/// Flatten spans into styled runs, each inheriting the `base` style.
pub fn style_runs(spans: &[InlineSpan], base: &str, palette: &Palette) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    push_runs(spans, base, palette, &mut runs);
    runs
}

fn push_runs(spans: &[InlineSpan], base: &str, palette: &Palette, runs: &mut Vec<StyledRun>) {
    for span in spans {
        match span {
            InlineSpan::PlainText(text) => runs.push(StyledRun {
                open: base.to_string(),
                text: sanitize_for_terminal(text),
                url: None,
            }),
            InlineSpan::Bold(children) => {
                push_runs(children, &format!("{}{}", base, BOLD.0), palette, runs)
            }
            InlineSpan::Italic(children) => {
                push_runs(children, &format!("{}{}", base, ITALIC.0), palette, runs)
            }
            InlineSpan::BoldItalic(children) => push_runs(
                children,
                &format!("{}{}{}", base, BOLD.0, ITALIC.0),
                palette,
                runs,
            ),
            InlineSpan::InlineCode(code) => runs.push(StyledRun {
                open: format!("{}{}", base, fg_color(palette.code)),
                text: sanitize_for_terminal(code),
                url: None,
            }),
            InlineSpan::Link { label, url } => runs.push(StyledRun {
                open: format!("{}{}{}", base, UNDERLINE.0, fg_color(palette.link)),
                text: sanitize_for_terminal(label),
                url: is_safe_url(url).then(|| url.clone()),
            }),
        }
    }
}

/// Split runs into words at whitespace.
///
/// Adjacent runs with no whitespace between them join into one word, so
/// `**bold**,` never wraps before the comma.
pub fn words(runs: &[StyledRun]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Option<Word> = None;

    for run in runs {
        for (i, piece) in run.text.split(char::is_whitespace).enumerate() {
            if i > 0 {
                words.extend(current.take());
            }
            if piece.is_empty() {
                continue;
            }
            let word = current.get_or_insert_with(Word::default);
            word.rendered.push_str(&run.render(piece));
            word.width += piece.width();
        }
    }

    words.extend(current);
    words
}

/// Greedy wrap to `width` columns, one space between words.
///
/// A word wider than `width` gets a line of its own. Empty input yields no
/// lines.
pub fn wrap_words(words: &[Word], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in words {
        if line_width > 0 && line_width + 1 + word.width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(&word.rendered);
        line_width += word.width;
    }

    if line_width > 0 {
        lines.push(line);
    }
    lines
}

/// Style and wrap spans in one step.
pub fn wrap_spans(
    spans: &[InlineSpan],
    base: &str,
    width: usize,
    palette: &Palette,
) -> Vec<String> {
    wrap_words(&words(&style_runs(spans, base, palette)), width)
}

/// Display width of spans rendered on one line.
pub fn spans_width(spans: &[InlineSpan], palette: &Palette) -> usize {
    let words = words(&style_runs(spans, "", palette));
    let gaps = words.len().saturating_sub(1);
    words.iter().map(|w| w.width).sum::<usize>() + gaps
}
