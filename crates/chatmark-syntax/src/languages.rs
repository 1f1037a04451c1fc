//! Language alias mapping.
//!
//! Maps fence info strings to the small set of lexers we ship.
//! This handles cases like "py" → Python, "tsx" → Script, etc.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Lexer families supported by the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// HTML, XML, SVG
    Markup,
    /// CSS and its preprocessors
    Stylesheet,
    /// C-family and JavaScript-like languages
    Script,
    /// Python
    Python,
    /// JSON
    Json,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Markup => write!(f, "markup"),
            Language::Stylesheet => write!(f, "stylesheet"),
            Language::Script => write!(f, "script"),
            Language::Python => write!(f, "python"),
            Language::Json => write!(f, "json"),
        }
    }
}

/// Static mapping of language aliases.
///
/// Each entry maps a lowercase alias to its lexer family.
pub static LANGUAGE_ALIASES: LazyLock<HashMap<&'static str, Language>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Markup
    for alias in ["html", "xml", "svg", "markup"] {
        m.insert(alias, Language::Markup);
    }

    // Stylesheets
    for alias in ["css", "scss", "less"] {
        m.insert(alias, Language::Stylesheet);
    }

    // C-family / JavaScript-like
    for alias in [
        "js",
        "jsx",
        "ts",
        "tsx",
        "javascript",
        "typescript",
        "c",
        "cpp",
        "java",
        "csharp",
        "go",
        "rust",
        "swift",
        "kotlin",
        "php",
    ] {
        m.insert(alias, Language::Script);
    }

    // Python
    m.insert("py", Language::Python);
    m.insert("python", Language::Python);

    // JSON
    m.insert("json", Language::Json);

    m
});

/// Resolve a fence language to a lexer family.
///
/// Case-insensitive; surrounding whitespace is ignored. Returns `None` for
/// languages without a lexer, which render untagged.
///
/// # Example
///
/// ```
/// use chatmark_syntax::{language_alias, Language};
///
/// assert_eq!(language_alias("TSX"), Some(Language::Script));
/// assert_eq!(language_alias("brainfuck"), None);
/// ```
pub fn language_alias(name: &str) -> Option<Language> {
    let lower = name.trim().to_lowercase();
    LANGUAGE_ALIASES.get(lower.as_str()).copied()
}

/// All aliases that map to `language`, sorted.
pub fn aliases_for(language: Language) -> Vec<&'static str> {
    let mut aliases: Vec<&'static str> = LANGUAGE_ALIASES
        .iter()
        .filter_map(|(alias, lang)| (*lang == language).then_some(*alias))
        .collect();
    aliases.sort_unstable();
    aliases
}

/// Iterate over every known alias.
pub fn all_aliases() -> impl Iterator<Item = &'static str> {
    LANGUAGE_ALIASES.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_aliases() {
        assert_eq!(language_alias("python"), Some(Language::Python));
        assert_eq!(language_alias("py"), Some(Language::Python));
        assert_eq!(language_alias("PY"), Some(Language::Python));
    }

    #[test]
    fn test_script_aliases() {
        for alias in ["js", "typescript", "rust", "go", "php", "cpp"] {
            assert_eq!(language_alias(alias), Some(Language::Script), "{}", alias);
        }
    }

    #[test]
    fn test_markup_and_stylesheet() {
        assert_eq!(language_alias("svg"), Some(Language::Markup));
        assert_eq!(language_alias(" scss "), Some(Language::Stylesheet));
    }

    #[test]
    fn test_unknown_is_none() {
        assert_eq!(language_alias("haskell"), None);
        assert_eq!(language_alias(""), None);
    }

    #[test]
    fn test_aliases_for() {
        assert_eq!(aliases_for(Language::Python), vec!["py", "python"]);
        assert_eq!(aliases_for(Language::Json), vec!["json"]);
    }

    #[test]
    fn test_all_aliases_count() {
        assert_eq!(all_aliases().count(), 25);
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Stylesheet.to_string(), "stylesheet");
    }
}
