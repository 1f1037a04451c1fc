//! Pipe-table cell handling.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for forced line breaks inside a cell: `<br>`, `<br/>`, `<br />`.
static CELL_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// Split a trimmed table row into trimmed cells.
///
/// The empty cell produced by a leading or trailing `|` is dropped; empty
/// cells in the middle of the row are kept.
///
/// # Example
///
/// ```
/// use chatmark_parser::table::split_cells;
///
/// assert_eq!(split_cells("| A | B |"), vec!["A", "B"]);
/// assert_eq!(split_cells("A | | C"), vec!["A", "", "C"]);
/// ```
pub fn split_cells(row: &str) -> Vec<String> {
    let mut parts: Vec<&str> = row.split('|').collect();

    if row.starts_with('|') && !parts.is_empty() {
        parts.remove(0);
    }
    if row.ends_with('|') && !parts.is_empty() {
        parts.pop();
    }

    parts.into_iter().map(|cell| cell.trim().to_string()).collect()
}

/// Split a cell into the lines forced by `<br>` markers.
///
/// Each part is trimmed. A cell without markers yields itself.
pub fn split_cell_lines(cell: &str) -> Vec<&str> {
    CELL_BREAK_RE.split(cell).map(str::trim).collect()
}
