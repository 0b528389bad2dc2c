//! Tag line scanner

use crate::gherkin::token::{Token, TokenKind};

/// Scan a tag line into one `Tag` token per `@`-initiated run.
///
/// A tag covers the `@` plus every following character up to the next
/// whitespace. Stray non-`@` characters between tags are passed over without
/// producing tokens, so `@smoke , @wip` still yields both tags.
pub fn scan_tags(text: &str, line_start: usize) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }

        if chars[i] == '@' {
            let tag_start = i;
            i += 1;
            while i < chars.len() && !chars[i].is_whitespace() {
                i += 1;
            }
            let tag: String = chars[tag_start..i].iter().collect();
            tokens.push(Token::new(line_start + tag_start, TokenKind::Tag, tag));
        } else {
            i += 1;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tags_with_offsets() {
        let tokens = scan_tags("@smoke @wip", 0);
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].start, tokens[0].text.as_str()), (0, "@smoke"));
        assert_eq!((tokens[1].start, tokens[1].text.as_str()), (7, "@wip"));
    }

    #[test]
    fn test_stray_punctuation_between_tags_is_skipped() {
        let tokens = scan_tags("@smoke , @wip", 0);
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["@smoke", "@wip"]);
    }
}
