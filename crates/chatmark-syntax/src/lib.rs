//! Chatmark Syntax
//!
//! Lexical tagging for fenced code blocks. Each line is tagged on its own
//! with a handful of regex passes (comments, strings, keywords, built-ins,
//! numbers) for a small fixed set of languages.
//!
//! Passes never re-tag text an earlier match already claimed: all matches
//! are collected first, overlaps are dropped, and the line is walked once.
//!
//! # Example
//!
//! ```
//! use chatmark_syntax::{Highlighter, TokenKind};
//!
//! let highlighter = Highlighter::for_language(Some("py"));
//! let tokens = highlighter.highlight_line("return len(x)");
//!
//! assert_eq!(tokens[0].kind, Some(TokenKind::Keyword));
//! assert_eq!(tokens[0].text, "return");
//! ```

mod languages;
mod rules;

pub use languages::{aliases_for, all_aliases, language_alias, Language, LANGUAGE_ALIASES};

use chatmark_core::{select_first_wins, Ranged};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Lexical category of a tagged run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Builtin,
    Number,
    /// Markup element name
    Tag,
    /// Markup attribute, stylesheet property or JSON key
    Attribute,
}

impl TokenKind {
    /// Class name used by HTML output.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Keyword => "keyword",
            TokenKind::Builtin => "builtin",
            TokenKind::Number => "number",
            TokenKind::Tag => "tag",
            TokenKind::Attribute => "attribute",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A run of source text, tagged or plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// `None` for untagged text
    pub kind: Option<TokenKind>,
    pub text: String,
}

impl Token {
    /// An untagged run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: None,
            text: text.into(),
        }
    }

    /// A tagged run.
    pub fn tagged(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            text: text.into(),
        }
    }

    /// Whether this run carries no tag.
    pub fn is_plain(&self) -> bool {
        self.kind.is_none()
    }
}

/// A tagged byte range within one line.
#[derive(Debug, Clone)]
struct Tagged {
    kind: TokenKind,
    range: Range<usize>,
}

impl Ranged for Tagged {
    fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

/// Per-line syntax tagger for one code block.
///
/// Construction is cheap; rule sets are compiled once per process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlighter {
    language: Option<Language>,
}

impl Highlighter {
    /// Create a highlighter for a known lexer family.
    pub fn new(language: Option<Language>) -> Self {
        Self { language }
    }

    /// A highlighter that never tags anything.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Create a highlighter from a fence language.
    ///
    /// Missing or unsupported languages produce a plain highlighter.
    pub fn for_language(name: Option<&str>) -> Self {
        let language = name.and_then(language_alias);
        if language.is_none() {
            trace!("no lexer for {:?}, rendering plain", name);
        }
        Self::new(language)
    }

    /// The lexer family in use.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Whether this highlighter tags nothing.
    pub fn is_plain(&self) -> bool {
        self.language.is_none()
    }

    /// Tag a single line.
    ///
    /// Concatenating the text of the returned tokens gives back `line`.
    pub fn highlight_line(&self, line: &str) -> Vec<Token> {
        if line.is_empty() {
            return Vec::new();
        }
        let Some(language) = self.language else {
            return vec![Token::plain(line)];
        };

        let mut candidates = Vec::new();
        for rule in rules::rules_for(language) {
            for caps in rule.regex.captures_iter(line) {
                let tagged = rule.groups.iter().find_map(|&(group, kind)| {
                    caps.get(group).map(|m| Tagged {
                        kind,
                        range: m.range(),
                    })
                });
                candidates.extend(tagged);
            }
        }

        let mut tokens = Vec::new();
        let mut pos = 0;
        for tagged in select_first_wins(candidates) {
            if tagged.range.start > pos {
                tokens.push(Token::plain(&line[pos..tagged.range.start]));
            }
            tokens.push(Token::tagged(tagged.kind, &line[tagged.range.clone()]));
            pos = tagged.range.end;
        }
        if pos < line.len() {
            tokens.push(Token::plain(&line[pos..]));
        }
        tokens
    }

    /// Tag every line of a block independently.
    pub fn highlight_block<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Vec<Token>> {
        lines
            .iter()
            .map(|line| self.highlight_line(line.as_ref()))
            .collect()
    }
}
