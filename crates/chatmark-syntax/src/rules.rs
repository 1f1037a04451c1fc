//! Per-language tagging rules.
//!
//! Rules are listed in priority order. When two rules match at the same
//! offset the earlier one wins; otherwise the earlier offset wins.

use crate::{Language, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

/// A single tagging pass.
#[derive(Debug)]
pub(crate) struct Rule {
    pub regex: Regex,
    /// `(capture group, kind)` pairs; the first group that took part in a
    /// match decides its kind and range. Group 0 is the whole match.
    pub groups: Vec<(usize, TokenKind)>,
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str) -> Self {
        Self::group(kind, pattern, 0)
    }

    fn group(kind: TokenKind, pattern: &str, group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            groups: vec![(group, kind)],
        }
    }

    /// Comments and strings scanned as one alternation, so whichever starts
    /// first owns its text and a marker inside the other is ignored.
    fn comment_or_string(comment: &str, string: &str) -> Self {
        Self {
            regex: Regex::new(&format!("({})|({})", comment, string)).unwrap(),
            groups: vec![(1, TokenKind::Comment), (2, TokenKind::String)],
        }
    }
}

const DOUBLE_QUOTED: &str = r#""(?:[^"\\]|\\.)*""#;
const SINGLE_QUOTED: &str = r"'(?:[^'\\]|\\.)*'";
const NUMBER: &str = r"\b\d+(?:\.\d+)?\b";

fn quoted() -> String {
    format!("{}|{}", DOUBLE_QUOTED, SINGLE_QUOTED)
}

static MARKUP_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::comment_or_string(r"<!--.*?(?:-->|$)", &quoted()),
        Rule::group(TokenKind::Tag, r"</?([A-Za-z][\w:-]*)", 1),
        Rule::group(TokenKind::Attribute, r"\s([A-Za-z_:][\w:.-]*)\s*=", 1),
    ]
});

static STYLESHEET_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::comment_or_string(r"/\*.*?(?:\*/|$)|//.*$", &quoted()),
        Rule::new(TokenKind::Keyword, r"@[\w-]+|!important\b"),
        Rule::group(TokenKind::Attribute, r"([A-Za-z-]+)\s*:", 1),
        Rule::new(TokenKind::Builtin, r"#[0-9A-Fa-f]{3,8}\b"),
        Rule::new(
            TokenKind::Number,
            r"-?\b\d+(?:\.\d+)?(?:px|em|rem|vh|vw|ms|s|%)?",
        ),
    ]
});

static SCRIPT_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::comment_or_string(
            r"//.*$|/\*.*?(?:\*/|$)",
            &format!("{}|`(?:[^`\\\\]|\\\\.)*`", quoted()),
        ),
        Rule::new(
            TokenKind::Keyword,
            r"\b(?:async|await|break|case|catch|class|const|continue|default|do|else|enum|export|extends|fn|for|func|function|if|impl|import|interface|let|match|mod|mut|new|package|private|protected|pub|public|return|static|struct|switch|this|throw|trait|try|type|use|var|void|while|yield)\b",
        ),
        Rule::new(
            TokenKind::Builtin,
            r"\b(?:Array|Math|Number|Object|Promise|String|bool|char|console|document|double|false|float|int|long|nil|null|print|printf|println|self|string|true|undefined|window)\b",
        ),
        Rule::new(TokenKind::Number, NUMBER),
    ]
});

static PYTHON_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::comment_or_string(r"#.*$", &quoted()),
        Rule::new(
            TokenKind::Keyword,
            r"\b(?:and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b",
        ),
        Rule::new(
            TokenKind::Builtin,
            r"\b(?:False|None|True|dict|enumerate|float|int|isinstance|len|list|open|print|range|self|set|str|super|tuple|zip)\b",
        ),
        Rule::new(TokenKind::Number, NUMBER),
    ]
});

static JSON_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::group(TokenKind::Attribute, &format!(r"({})\s*:", DOUBLE_QUOTED), 1),
        Rule::new(TokenKind::String, DOUBLE_QUOTED),
        Rule::new(TokenKind::Keyword, r"\b(?:true|false|null)\b"),
        Rule::new(TokenKind::Number, r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b"),
    ]
});

/// The rule list for a language.
pub(crate) fn rules_for(language: Language) -> &'static [Rule] {
    match language {
        Language::Markup => MARKUP_RULES.as_slice(),
        Language::Stylesheet => STYLESHEET_RULES.as_slice(),
        Language::Script => SCRIPT_RULES.as_slice(),
        Language::Python => PYTHON_RULES.as_slice(),
        Language::Json => JSON_RULES.as_slice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_compile() {
        for language in [
            Language::Markup,
            Language::Stylesheet,
            Language::Script,
            Language::Python,
            Language::Json,
        ] {
            assert!(!rules_for(language).is_empty());
        }
    }

    #[test]
    fn test_group_indices_exist() {
        for language in [
            Language::Markup,
            Language::Stylesheet,
            Language::Script,
            Language::Python,
            Language::Json,
        ] {
            for rule in rules_for(language) {
                for (group, _) in &rule.groups {
                    assert!(*group < rule.regex.captures_len());
                }
            }
        }
    }
}
