//! Table rendering.
//!
//! Tables are drawn as a box grid. Columns take their natural width when
//! the table fits; otherwise the available width is shared out in
//! proportion and cell text wraps.

use crate::text::{spans_width, wrap_spans};
use crate::Cell;
use chatmark_ansi::codes::{fg_color, RESET};
use chatmark_ansi::{pad_to_width, BOLD};
use chatmark_config::Palette;

/// Minimum column width (characters) when shrinking.
const MIN_COL_WIDTH: usize = 3;

/// Number of columns: the widest of header and rows.
pub fn column_count(header: &[Cell], rows: &[Vec<Cell>]) -> usize {
    rows.iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

fn cell_width(cell: &Cell, palette: &Palette) -> usize {
    cell.iter()
        .map(|line| spans_width(line, palette))
        .max()
        .unwrap_or(0)
}

/// Content width of each column for a table drawn within `width` columns.
pub fn column_widths(
    header: &[Cell],
    rows: &[Vec<Cell>],
    width: usize,
    palette: &Palette,
) -> Vec<usize> {
    let cols = column_count(header, rows);
    if cols == 0 {
        return Vec::new();
    }

    let mut natural = vec![1; cols];
    for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            natural[i] = natural[i].max(cell_width(cell, palette));
        }
    }

    // "│ " before each column, " " after, and the closing "│"
    let available = width.saturating_sub(3 * cols + 1);
    let total: usize = natural.iter().sum();
    if total <= available {
        return natural;
    }

    natural
        .iter()
        .map(|w| (w * available / total).max(MIN_COL_WIDTH))
        .collect()
}

fn border(
    left: &str,
    mid: &str,
    right: &str,
    widths: &[usize],
    left_margin: &str,
    palette: &Palette,
) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!(
        "{}{}{}{}{}{}",
        left_margin,
        fg_color(palette.gutter),
        left,
        segments.join(mid),
        right,
        RESET
    )
}

fn render_row(
    cells: &[Cell],
    widths: &[usize],
    base: &str,
    left_margin: &str,
    palette: &Palette,
) -> Vec<String> {
    let wrapped: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| match cells.get(i) {
            Some(cell) => cell
                .iter()
                .flat_map(|line| {
                    let lines = wrap_spans(line, base, w, palette);
                    if lines.is_empty() {
                        vec![String::new()]
                    } else {
                        lines
                    }
                })
                .collect(),
            None => Vec::new(),
        })
        .collect();

    let height = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let bar = format!("{}│{}", fg_color(palette.gutter), RESET);

    (0..height)
        .map(|row| {
            let mut line = format!("{}{}", left_margin, bar);
            for (col, &w) in widths.iter().enumerate() {
                let content = wrapped[col].get(row).map(String::as_str).unwrap_or("");
                line.push(' ');
                line.push_str(&pad_to_width(content, w));
                line.push(' ');
                line.push_str(&bar);
            }
            line
        })
        .collect()
}

/// Render a table for the terminal.
pub fn render_table(
    header: &[Cell],
    rows: &[Vec<Cell>],
    width: usize,
    left_margin: &str,
    palette: &Palette,
) -> Vec<String> {
    let widths = column_widths(header, rows, width, palette);
    if widths.is_empty() {
        return Vec::new();
    }

    let mut out = vec![border("┌", "┬", "┐", &widths, left_margin, palette)];
    out.extend(render_row(header, &widths, BOLD.0, left_margin, palette));
    out.push(border("├", "┼", "┤", &widths, left_margin, palette));
    for row in rows {
        out.extend(render_row(row, &widths, "", left_margin, palette));
    }
    out.push(border("└", "┴", "┘", &widths, left_margin, palette));
    out
}
