//! Hex color parsing.

use crate::codes::Rgb;

/// Parse `#rrggbb` or `#rgb` (leading `#` optional).
///
/// ```
/// use chatmark_ansi::color::hex2rgb;
/// assert_eq!(hex2rgb("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(hex2rgb("fff"), Some((255, 255, 255)));
/// assert_eq!(hex2rgb("#zzz"), None);
/// ```
pub fn hex2rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

/// Format an RGB triple as `#rrggbb`.
pub fn rgb2hex((r, g, b): Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
