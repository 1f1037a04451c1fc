//! ANSI text processing utilities.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// CSI sequences and OSC sequences terminated by `ST` or `BEL`.
pub const ANSIESCAPE: &str = r"\x1b(?:\[[0-9;?]*[a-zA-Z]|\][^\x07\x1b]*(?:\x07|\x1b\\))";

static ANSIESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ANSIESCAPE).unwrap());

/// Remove all ANSI escape sequences from text.
///
/// ```
/// use chatmark_ansi::utils::visible;
/// assert_eq!(visible("\x1b[1mBold\x1b[0m text"), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ANSIESCAPE_RE.replace_all(text, "").into_owned()
}

/// Display width of text in terminal columns, ignoring escape sequences.
///
/// ```
/// use chatmark_ansi::utils::visible_length;
/// assert_eq!(visible_length("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_length("你好"), 4);
/// ```
pub fn visible_length(text: &str) -> usize {
    visible(text).width()
}

/// Right-pad styled text with spaces to `width` visible columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let len = visible_length(text);
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_strips_hyperlinks() {
        let linked = "\x1b]8;;https://x.y\x1b\\label\x1b]8;;\x1b\\";
        assert_eq!(visible(linked), "label");
    }

    #[test]
    fn test_visible_length_plain() {
        assert_eq!(visible_length("abc"), 3);
        assert_eq!(visible_length(""), 0);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("\x1b[1mab\x1b[22m", 4), "\x1b[1mab\x1b[22m  ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    }
}
