//! Keyword vocabulary and line-leading keyword matching
//!
//! The vocabulary is a fixed, process-wide set of section keywords (Feature,
//! Background, Scenario, Scenario Outline, Rule, Example, Examples) and step
//! keywords (Given, When, Then, And, But) across English, German, French and
//! Spanish.
//!
//! Several keywords are prefixes of others ("Scenario" vs "Scenario
//! Outline"), so candidates are evaluated longest-first: the table is sorted
//! by character length descending once, at first use. A candidate only
//! matches when the character after it is end-of-line, whitespace or `:`,
//! which keeps a keyword from matching inside a longer identifier.

use std::cmp::Reverse;

use once_cell::sync::Lazy;

use super::scan::scan_parameters;
use super::token::{Token, TokenKind};

/// Section and step keywords across the supported languages.
const VOCABULARY: &[&str] = &[
    // Feature
    "Feature",
    "Funktionalität",
    "Fonctionnalité",
    "Característica",
    // Background
    "Background",
    "Grundlage",
    "Contexte",
    "Antecedentes",
    // Scenario
    "Scenario",
    "Szenario",
    "Scénario",
    "Escenario",
    // Scenario Outline
    "Scenario Outline",
    "Szenariogrundriss",
    "Plan du scénario",
    "Esquema del escenario",
    // Rule
    "Rule",
    "Regel",
    "Règle",
    "Regla",
    // Example
    "Example",
    "Beispiel",
    "Exemple",
    "Ejemplo",
    // Examples
    "Examples",
    "Beispiele",
    "Exemples",
    "Ejemplos",
    // Given
    "Given",
    "Angenommen",
    "Soit",
    "Dado",
    "Étant donné",
    // When
    "When",
    "Wenn",
    "Quand",
    "Cuando",
    "Lorsque",
    // Then
    "Then",
    "Dann",
    "Alors",
    "Entonces",
    // And
    "And",
    "Und",
    "Et",
    "Y",
    // But
    "But",
    "Aber",
    "Mais",
    "Pero",
];

/// Vocabulary sorted by character length, longest first, so that
/// prefix-ambiguous keywords always resolve to the longest valid match.
static KEYWORDS_BY_LENGTH: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut keywords = VOCABULARY.to_vec();
    keywords.sort_by_key(|keyword| Reverse(keyword.chars().count()));
    keywords
});

/// Scan a content line for a line-leading keyword and inline parameters.
///
/// When the line starts (after leading whitespace) with a vocabulary keyword
/// followed by a valid boundary, one `Keyword` token is emitted covering the
/// line's own spelling of the keyword, and the remainder of the line is
/// scanned for parameters at adjusted absolute offsets. When no keyword
/// matches, the entire line is scanned for parameters instead.
pub fn scan_keyword_and_parameters(text: &str, line_start: usize) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let indent = chars.iter().take_while(|c| c.is_whitespace()).count();

    for keyword in KEYWORDS_BY_LENGTH.iter() {
        let keyword_len = keyword.chars().count();
        let candidate = match chars.get(indent..indent + keyword_len) {
            Some(candidate) => candidate,
            None => continue,
        };
        if !chars_eq_ignore_case(candidate, keyword) {
            continue;
        }
        if let Some(boundary) = chars.get(indent + keyword_len) {
            if !boundary.is_whitespace() && *boundary != ':' {
                continue;
            }
        }

        let matched: String = candidate.iter().collect();
        let mut tokens = vec![Token::new(line_start + indent, TokenKind::Keyword, matched)];
        let remainder: String = chars[indent + keyword_len..].iter().collect();
        tokens.extend(scan_parameters(
            &remainder,
            line_start + indent + keyword_len,
        ));
        return tokens;
    }

    scan_parameters(text, line_start)
}

/// Case-insensitive comparison between a span of line characters and a
/// vocabulary keyword.
fn chars_eq_ignore_case(candidate: &[char], keyword: &str) -> bool {
    candidate.len() == keyword.chars().count()
        && candidate
            .iter()
            .zip(keyword.chars())
            .all(|(line_char, keyword_char)| {
                line_char.to_lowercase().eq(keyword_char.to_lowercase())
            })
}
