//! Parsed colors.

use crate::style::{defaults, StyleConfig};
use chatmark_ansi::{hex2rgb, Rgb};
use log::warn;

/// RGB colors resolved from a [`StyleConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: Rgb,
    pub quote: Rgb,
    pub code: Rgb,
    pub code_background: Rgb,
    pub link: Rgb,
    pub keyword: Rgb,
    pub string: Rgb,
    pub number: Rgb,
    pub comment: Rgb,
    pub builtin: Rgb,
    pub gutter: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}

impl Palette {
    /// Resolve every color. An unparseable value falls back to its default.
    pub fn from_config(style: &StyleConfig) -> Self {
        Self {
            heading: resolve("Heading", &style.heading, defaults::heading),
            quote: resolve("Quote", &style.quote, defaults::quote),
            code: resolve("Code", &style.code, defaults::code),
            code_background: resolve(
                "CodeBackground",
                &style.code_background,
                defaults::code_background,
            ),
            link: resolve("Link", &style.link, defaults::link),
            keyword: resolve("Keyword", &style.keyword, defaults::keyword),
            string: resolve("String", &style.string, defaults::string),
            number: resolve("Number", &style.number, defaults::number),
            comment: resolve("Comment", &style.comment, defaults::comment),
            builtin: resolve("Builtin", &style.builtin, defaults::builtin),
            gutter: resolve("Gutter", &style.gutter, defaults::gutter),
        }
    }
}

fn resolve(key: &str, value: &str, fallback: fn() -> String) -> Rgb {
    hex2rgb(value).unwrap_or_else(|| {
        warn!("invalid color {:?} for {}, using default", value, key);
        hex2rgb(&fallback()).unwrap_or((255, 255, 255))
    })
}
