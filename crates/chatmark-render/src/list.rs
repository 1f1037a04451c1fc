//! List rendering.
//!
//! Bullets for unordered lists, numbers for ordered ones. Source numerals
//! are ignored; items are numbered from 1. Wrapped item text hangs under
//! the first line.

use crate::text::wrap_spans;
use chatmark_ansi::style::colored;
use chatmark_config::Palette;
use chatmark_core::ListKind;
use chatmark_parser::InlineSpan;

/// Bullet for unordered items.
pub const BULLET: &str = "•";

/// Marker text for item `index` (0-based) of a list of `count` items.
///
/// Ordered markers are right-aligned so item text lines up.
pub fn marker(kind: ListKind, index: usize, count: usize) -> String {
    match kind {
        ListKind::Unordered => BULLET.to_string(),
        ListKind::Ordered => {
            let width = count.max(1).to_string().len();
            format!("{:>width$}.", index + 1, width = width)
        }
    }
}

/// Render every item of a list.
pub fn render_list(
    kind: ListKind,
    items: &[Vec<InlineSpan>],
    width: usize,
    left_margin: &str,
    palette: &Palette,
) -> Vec<String> {
    let mut out = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let marker = marker(kind, i, items.len());
        // marker + one space
        let hang = marker.chars().count() + 1;
        let styled_marker = colored(palette.heading, &marker);
        let wrapped = wrap_spans(item, "", width.saturating_sub(hang).max(1), palette);

        if wrapped.is_empty() {
            out.push(format!("{}{}", left_margin, styled_marker));
            continue;
        }
        for (j, line) in wrapped.into_iter().enumerate() {
            if j == 0 {
                out.push(format!("{}{} {}", left_margin, styled_marker, line));
            } else {
                out.push(format!("{}{}{}", left_margin, " ".repeat(hang), line));
            }
        }
    }

    out
}
