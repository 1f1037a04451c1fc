//! Style configuration.
//!
//! Colors are kept as hex strings so the TOML stays readable; see
//! [`Palette`](crate::Palette) for the parsed form.

use serde::{Deserialize, Serialize};

/// Style configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Output width override (0 = auto-detect).
    /// Default: 0
    #[serde(default)]
    pub width: usize,

    /// Left margin in characters.
    /// Default: 2
    #[serde(default = "default_margin")]
    pub margin: usize,

    #[serde(default = "defaults::heading")]
    pub heading: String,
    #[serde(default = "defaults::quote")]
    pub quote: String,
    /// Inline code and code block text
    #[serde(default = "defaults::code")]
    pub code: String,
    #[serde(default = "defaults::code_background")]
    pub code_background: String,
    #[serde(default = "defaults::link")]
    pub link: String,
    #[serde(default = "defaults::keyword")]
    pub keyword: String,
    #[serde(default = "defaults::string")]
    pub string: String,
    #[serde(default = "defaults::number")]
    pub number: String,
    #[serde(default = "defaults::comment")]
    pub comment: String,
    #[serde(default = "defaults::builtin")]
    pub builtin: String,
    /// Line-number gutter
    #[serde(default = "defaults::gutter")]
    pub gutter: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: 0,
            margin: default_margin(),
            heading: defaults::heading(),
            quote: defaults::quote(),
            code: defaults::code(),
            code_background: defaults::code_background(),
            link: defaults::link(),
            keyword: defaults::keyword(),
            string: defaults::string(),
            number: defaults::number(),
            comment: defaults::comment(),
            builtin: defaults::builtin(),
            gutter: defaults::gutter(),
        }
    }
}

impl StyleConfig {
    /// Merge another StyleConfig into this one.
    pub fn merge(&mut self, other: &StyleConfig) {
        *self = other.clone();
    }
}

fn default_margin() -> usize {
    2
}

/// Default colors, one function per key for serde.
pub(crate) mod defaults {
    macro_rules! color {
        ($($name:ident => $hex:literal),* $(,)?) => {
            $(pub fn $name() -> String { $hex.to_string() })*
        };
    }

    color! {
        heading => "#7aa2f7",
        quote => "#9aa5ce",
        code => "#e0af68",
        code_background => "#1f2335",
        link => "#7dcfff",
        keyword => "#bb9af7",
        string => "#9ece6a",
        number => "#ff9e64",
        comment => "#565f89",
        builtin => "#2ac3de",
        gutter => "#3b4261",
    }
}
