//! Span token types produced by the classification engine
//!
//! This module contains the output types of classification:
//! - Token: one classified span of feature-file text
//! - TokenKind: the fixed set of span categories
//!
//! Tokens are positional: each one records the absolute character offset of
//! its first character and its character count. Within a single line's
//! output, tokens appear in left-to-right scan order, never overlap, and
//! (with the exception of whole-line comment and doc-string tokens, which
//! cover the full line) lie strictly inside the line's character range.
//!
//! The covered text is stored on the token as well. It is redundant with the
//! offsets but makes tokens self-describing for the rendering hand-off and
//! for tests, the same way the lexer keeps raw source text on its tokens.

use std::fmt;

/// The category of a classified span.
///
/// Exactly these seven kinds ever appear in output; the rendering layer owns
/// the visual mapping for each one via [`TokenKind::style_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// Section or step keyword at the start of a line (Feature, Given, ...)
    Keyword,

    /// A whole `#` comment line, leading whitespace included
    Comment,

    /// One `@name` label on a tag line
    Tag,

    /// An inline `<...>`, `{...}`, `"..."` or `'...'` span in step text
    Parameter,

    /// A doc-string delimiter line, or any line inside a doc-string block
    DocString,

    /// The content of one table cell
    TableCell,

    /// A single `|` delimiter in a table row
    TablePipe,
}

impl TokenKind {
    /// Stable style key consumed by the rendering layer.
    ///
    /// The keys form the contract with external style definitions; renderers
    /// map each key to a concrete color/format and never see the enum.
    pub fn style_key(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "gherkin.keyword",
            TokenKind::Comment => "gherkin.comment",
            TokenKind::Tag => "gherkin.tag",
            TokenKind::Parameter => "gherkin.parameter",
            TokenKind::DocString => "gherkin.docstring",
            TokenKind::TableCell => "gherkin.table.cell",
            TokenKind::TablePipe => "gherkin.table.pipe",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Comment => "COMMENT",
            TokenKind::Tag => "TAG",
            TokenKind::Parameter => "PARAMETER",
            TokenKind::DocString => "DOC_STRING",
            TokenKind::TableCell => "TABLE_CELL",
            TokenKind::TablePipe => "TABLE_PIPE",
        };
        write!(f, "{}", name)
    }
}

/// One classified span of feature-file text.
///
/// Offsets and lengths count characters, not bytes, so spans remain valid
/// over non-ASCII text (keywords like `Funktionalität` or `Étant donné`).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Absolute character offset of the first character of the span
    pub start: usize,

    /// Character count of the span, always greater than zero
    pub length: usize,

    /// The category of this span
    pub kind: TokenKind,

    /// The exact text covered by the span
    pub text: String,
}

impl Token {
    /// Build a token over `text`, deriving the length from its character
    /// count so `length` and `text` can never disagree.
    pub fn new(start: usize, kind: TokenKind, text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Token {
            start,
            length,
            kind,
            text,
        }
    }

    /// Character offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let token = Token::new(4, TokenKind::Keyword, "Funktionalität");
        assert_eq!(token.length, 14);
        assert_eq!(token.end(), 18);
    }

    #[test]
    fn test_style_keys_are_distinct() {
        let kinds = [
            TokenKind::Keyword,
            TokenKind::Comment,
            TokenKind::Tag,
            TokenKind::Parameter,
            TokenKind::DocString,
            TokenKind::TableCell,
            TokenKind::TablePipe,
        ];
        let mut keys: Vec<_> = kinds.iter().map(|k| k.style_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), kinds.len());
    }
}
