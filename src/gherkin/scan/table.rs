//! Table row scanner
//!
//! A row produces one `TablePipe` token per `|` and one `TableCell` token
//! per non-empty run of characters between two consecutive pipes. Spaces
//! immediately after the opening pipe are not part of the cell; trailing
//! spaces before the closing pipe are kept verbatim in the cell text.
//!
//! A cell only materializes when its closing pipe is reached, so content
//! after the final pipe on the line is dropped. An empty cell (pipe meeting
//! pipe after the space skip) produces no cell token.

use crate::gherkin::token::{Token, TokenKind};

/// Scan a table row into pipe and cell tokens, in left-to-right order.
pub fn scan_table_row(text: &str, line_start: usize) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut cell_start: Option<usize> = None;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '|' {
            if let Some(start) = cell_start.take() {
                if i > start {
                    let cell: String = chars[start..i].iter().collect();
                    tokens.push(Token::new(line_start + start, TokenKind::TableCell, cell));
                }
            }
            tokens.push(Token::new(line_start + i, TokenKind::TablePipe, "|"));
            i += 1;

            // Leading spaces after the pipe belong to the row, not the cell.
            while i < chars.len() && chars[i] == ' ' {
                i += 1;
            }
            cell_start = Some(i);
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
    fn test_row_with_two_cells() {
        let tokens = scan_table_row("| a | b |", 0);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::TablePipe,
                TokenKind::TableCell,
                TokenKind::TablePipe,
                TokenKind::TableCell,
                TokenKind::TablePipe,
            ]
        );
        // Leading space trimmed, trailing space preserved.
        assert_eq!(tokens[1].text, "a ");
        assert_eq!(tokens[3].text, "b ");
    }

    #[test]
    fn test_content_after_final_pipe_is_dropped() {
        let tokens = scan_table_row("| a | b", 0);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::TablePipe,
                TokenKind::TableCell,
                TokenKind::TablePipe,
            ]
        );
    }

    #[test]
    fn test_empty_cell_produces_only_pipes() {
        let tokens = scan_table_row("| | x |", 0);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::TablePipe,
                TokenKind::TablePipe,
                TokenKind::TableCell,
                TokenKind::TablePipe,
            ]
        );
    }
}
