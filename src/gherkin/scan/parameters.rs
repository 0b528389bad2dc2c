//! Inline parameter scanner
//!
//! Finds the four delimited parameter forms inside arbitrary step text:
//! angle-bracket `<...>`, brace `{...}`, double-quoted `"..."` and
//! single-quoted `'...'`. The emitted token covers the full span including
//! both delimiters. Inside the quoted forms a backslash skips the following
//! character, so escaped quotes never close the span.
//!
//! An opening delimiter with no matching closer emits nothing, and because
//! the scan position has already run to the end of the fragment looking for
//! the closer, it also ends the scan: one unterminated quote or bracket
//! suppresses every later parameter on the fragment.

use crate::gherkin::token::{Token, TokenKind};

/// Scan a text fragment for parameter spans at absolute offsets.
pub fn scan_parameters(text: &str, fragment_start: usize) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        i = match chars[i] {
            '<' => scan_bracketed(&chars, i, '>', fragment_start, &mut tokens),
            '{' => scan_bracketed(&chars, i, '}', fragment_start, &mut tokens),
            '"' => scan_quoted(&chars, i, '"', fragment_start, &mut tokens),
            '\'' => scan_quoted(&chars, i, '\'', fragment_start, &mut tokens),
            _ => i + 1,
        };
    }

    tokens
}

/// Scan a `<...>` or `{...}` span opening at `open`; returns the position to
/// resume from. With no closer in sight the returned position is the end of
/// the fragment and no token is emitted.
fn scan_bracketed(
    chars: &[char],
    open: usize,
    closer: char,
    fragment_start: usize,
    tokens: &mut Vec<Token>,
) -> usize {
    let mut i = open + 1;
    while i < chars.len() && chars[i] != closer {
        i += 1;
    }
    emit_if_closed(chars, open, i, fragment_start, tokens)
}

/// Scan a quoted span opening at `open`, honoring backslash escapes.
fn scan_quoted(
    chars: &[char],
    open: usize,
    closer: char,
    fragment_start: usize,
    tokens: &mut Vec<Token>,
) -> usize {
    let mut i = open + 1;
    while i < chars.len() && chars[i] != closer {
        if chars[i] == '\\' && i + 1 < chars.len() {
            i += 2;
        } else {
            i += 1;
        }
    }
    emit_if_closed(chars, open, i, fragment_start, tokens)
}

/// Emit a `Parameter` token when the closer at `close` exists; either way,
/// return the position the enclosing scan resumes from.
fn emit_if_closed(
    chars: &[char],
    open: usize,
    close: usize,
    fragment_start: usize,
    tokens: &mut Vec<Token>,
) -> usize {
    if close < chars.len() {
        let text: String = chars[open..=close].iter().collect();
        tokens.push(Token::new(fragment_start + open, TokenKind::Parameter, text));
        close + 1
    } else {
        close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_four_forms() {
        let tokens = scan_parameters(r#"<a> {b} "c" 'd'"#, 0);
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["<a>", "{b}", "\"c\"", "'d'"]);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let tokens = scan_parameters(r#"say "a \" b" now"#, 0);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, r#""a \" b""#);
    }

    #[test]
    fn test_unterminated_opener_suppresses_the_rest() {
        let tokens = scan_parameters(r#"a "no close here {param} <p>"#, 0);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_offsets_are_absolute() {
        let tokens = scan_parameters("see <here>", 100);
        assert_eq!(tokens[0].start, 104);
        assert_eq!(tokens[0].length, 6);
    }
}
