//! Heading rendering.
//!
//! - h1: bold, heading color, underlined with a rule
//! - h2: bold, heading color
//! - h3: bold
//! - h4: heading color

use crate::text::wrap_spans;
use chatmark_ansi::codes::{fg_color, RESET};
use chatmark_ansi::BOLD;
use chatmark_config::Palette;
use chatmark_parser::InlineSpan;

/// Escape codes opening a heading of `level`.
fn heading_style(level: u8, palette: &Palette) -> String {
    let color = fg_color(palette.heading);
    match level {
        1 | 2 => format!("{}{}", BOLD.0, color),
        3 => BOLD.0.to_string(),
        _ => color,
    }
}

/// Render a heading, wrapped to `width`.
pub fn render_heading(
    level: u8,
    spans: &[InlineSpan],
    width: usize,
    left_margin: &str,
    palette: &Palette,
) -> Vec<String> {
    let base = heading_style(level, palette);
    let mut lines: Vec<String> = wrap_spans(spans, &base, width, palette)
        .into_iter()
        .map(|line| format!("{}{}", left_margin, line))
        .collect();

    if level == 1 {
        lines.push(format!(
            "{}{}{}{}",
            left_margin,
            fg_color(palette.heading),
            "━".repeat(width),
            RESET
        ));
    }

    lines
}
