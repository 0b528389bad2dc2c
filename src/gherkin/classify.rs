//! Per-line dispatch for the classification engine
//!
//! Every line is routed to exactly one branch, tested in priority order:
//!
//! 1. blank line: no tokens
//! 2. `#` after leading whitespace: one whole-line `Comment` token
//! 3. `@`: the tag scanner
//! 4. `|`: the table-row scanner
//! 5. doc-string delimiter: toggle the session flag, one whole-line
//!    `DocString` token
//! 6. inside a doc-string: one whole-line `DocString` token, no interior
//!    scanning
//! 7. otherwise: the keyword matcher followed by the parameter scanner
//!
//! Step 5 is the only point that mutates cross-line state. The toggle is
//! unconditional: a delimiter line cannot tell whether it opens or closes a
//! block other than by parity, which is why callers must supply lines in
//! document order.

use once_cell::sync::Lazy;
use regex::Regex;

use super::keyword::scan_keyword_and_parameters;
use super::scan::{scan_table_row, scan_tags};
use super::token::{Token, TokenKind};

/// A doc-string delimiter line: optional indentation followed by a
/// triple-quote or triple-backtick marker.
static DOC_STRING_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^\s*("""|```)"#).unwrap());

/// Whether `text` is a doc-string delimiter line.
pub fn is_doc_string_delimiter(text: &str) -> bool {
    DOC_STRING_DELIMITER.is_match(text)
}

/// Classify one line given its absolute character offset and the session's
/// doc-string flag.
pub fn classify_line(text: &str, line_start: usize, in_doc_string: &mut bool) -> Vec<Token> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let trimmed = text.trim_start();

    if trimmed.starts_with('#') {
        return vec![Token::new(line_start, TokenKind::Comment, text)];
    }
    if trimmed.starts_with('@') {
        return scan_tags(text, line_start);
    }
    if trimmed.starts_with('|') {
        return scan_table_row(text, line_start);
    }
    if is_doc_string_delimiter(text) {
        *in_doc_string = !*in_doc_string;
        return vec![Token::new(line_start, TokenKind::DocString, text)];
    }
    if *in_doc_string {
        return vec![Token::new(line_start, TokenKind::DocString, text)];
    }

    scan_keyword_and_parameters(text, line_start)
}
