//! Feature flags configuration.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Show a line-number gutter on code blocks.
    /// Default: false
    #[serde(default)]
    pub line_numbers: bool,

    /// Tag code block tokens for supported languages.
    /// Default: true
    #[serde(default = "default_true")]
    pub highlight: bool,

    /// Copy the last code block to the clipboard via OSC 52 after rendering.
    /// Default: false
    #[serde(default)]
    pub clipboard: bool,

    /// Nesting limit for emphasis inside emphasis.
    /// Default: 50
    #[serde(default = "default_max_inline_depth")]
    pub max_inline_depth: usize,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            line_numbers: false,
            highlight: true,
            clipboard: false,
            max_inline_depth: default_max_inline_depth(),
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// TOML cannot tell "unset" from "default", so every value is taken
    /// from `other`; an override file is parsed with defaults filled in.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.line_numbers = other.line_numbers;
        self.highlight = other.highlight;
        self.clipboard = other.clipboard;
        self.max_inline_depth = other.max_inline_depth;
    }
}

fn default_true() -> bool {
    true
}

fn default_max_inline_depth() -> usize {
    50
}
