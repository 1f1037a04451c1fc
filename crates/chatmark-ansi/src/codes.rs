//! ANSI escape code constants.

/// Prefix for a 24-bit foreground color: `FG` + `r;g;b` + `m`.
pub const FG: &str = "\x1b[38;2;";

/// Prefix for a 24-bit background color: `BG` + `r;g;b` + `m`.
pub const BG: &str = "\x1b[48;2;";

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Reset foreground color to default.
pub const FGRESET: &str = "\x1b[39m";

/// Reset background color to default.
pub const BGRESET: &str = "\x1b[49m";

pub const BOLD_ON: &str = "\x1b[1m";
pub const BOLD_OFF: &str = "\x1b[22m";
pub const DIM_ON: &str = "\x1b[2m";
pub const DIM_OFF: &str = "\x1b[22m";
pub const ITALIC_ON: &str = "\x1b[3m";
pub const ITALIC_OFF: &str = "\x1b[23m";
pub const UNDERLINE_ON: &str = "\x1b[4m";
pub const UNDERLINE_OFF: &str = "\x1b[24m";
pub const REVERSE_ON: &str = "\x1b[7m";
pub const REVERSE_OFF: &str = "\x1b[27m";

/// OSC 8 hyperlink start. The URL follows, then `ST`.
pub const LINK_START: &str = "\x1b]8;;";

/// String terminator for OSC sequences.
pub const ST: &str = "\x1b\\";

/// OSC 8 hyperlink end.
pub const LINK_END: &str = "\x1b]8;;\x1b\\";

/// RGB triple.
pub type Rgb = (u8, u8, u8);

/// Foreground color escape sequence.
///
/// ```
/// use chatmark_ansi::codes::fg_color;
/// assert_eq!(fg_color((255, 0, 0)), "\x1b[38;2;255;0;0m");
/// ```
pub fn fg_color((r, g, b): Rgb) -> String {
    format!("{}{};{};{}m", FG, r, g, b)
}

/// Background color escape sequence.
pub fn bg_color((r, g, b): Rgb) -> String {
    format!("{}{};{};{}m", BG, r, g, b)
}

/// Wrap `text` in an OSC 8 hyperlink to `url`.
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("{}{}{}{}{}", LINK_START, url, ST, text, LINK_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fg_color() {
        assert_eq!(fg_color((255, 128, 0)), "\x1b[38;2;255;128;0m");
    }

    #[test]
    fn test_bg_color() {
        assert_eq!(bg_color((0, 128, 255)), "\x1b[48;2;0;128;255m");
    }

    #[test]
    fn test_hyperlink() {
        assert_eq!(
            hyperlink("https://a.b", "x"),
            "\x1b]8;;https://a.b\x1b\\x\x1b]8;;\x1b\\"
        );
    }
}
