//! Style pairs for toggleable ANSI formatting.

use crate::codes;

/// An (enable, disable) pair of escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePair(pub &'static str, pub &'static str);

impl StylePair {
    /// Surround `text` with this pair.
    pub fn wrap(self, text: &str) -> String {
        format!("{}{}{}", self.0, text, self.1)
    }
}

pub const BOLD: StylePair = StylePair(codes::BOLD_ON, codes::BOLD_OFF);
pub const ITALIC: StylePair = StylePair(codes::ITALIC_ON, codes::ITALIC_OFF);
pub const UNDERLINE: StylePair = StylePair(codes::UNDERLINE_ON, codes::UNDERLINE_OFF);
pub const DIM: StylePair = StylePair(codes::DIM_ON, codes::DIM_OFF);
pub const REVERSE: StylePair = StylePair(codes::REVERSE_ON, codes::REVERSE_OFF);

/// Surround `text` with a foreground color, restoring the default after.
pub fn colored(color: codes::Rgb, text: &str) -> String {
    format!("{}{}{}", codes::fg_color(color), text, codes::FGRESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(BOLD.wrap("x"), "\x1b[1mx\x1b[22m");
        assert_eq!(ITALIC.wrap(""), "\x1b[3m\x1b[23m");
    }

    #[test]
    fn test_colored() {
        assert_eq!(colored((1, 2, 3), "x"), "\x1b[38;2;1;2;3mx\x1b[39m");
    }
}
