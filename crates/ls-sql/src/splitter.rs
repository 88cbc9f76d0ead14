//! Statement splitting over the token sequence
//!
//! A top-level `;` punctuation token ends a statement. Separators inside
//! string literals, quoted identifiers, and comments never split because
//! the tokenizer keeps those characters inside a single token.

use crate::token::{Token, TokenKind};
use std::ops::Range;

/// One statement: a borrowed, contiguous slice of the full token
/// sequence, including its leading trivia and terminating `;` if any.
#[derive(Debug, Clone)]
pub struct Statement<'a> {
    /// Zero-based position of the statement in the file
    pub index: usize,
    /// The statement's span in the full token sequence
    pub range: Range<usize>,
    pub tokens: &'a [Token],
}

impl<'a> Statement<'a> {
    /// Iterate the statement's non-trivia tokens, excluding the
    /// terminating separator and end-of-input.
    pub fn significant(&self) -> impl Iterator<Item = &'a Token> {
        self.tokens
            .iter()
            .filter(|t| !t.is_trivia() && t.kind != TokenKind::EndOfInput && !t.is_punct(";"))
    }

    /// True when the statement holds nothing besides trivia and its
    /// separator (a zero-content statement between two `;`).
    pub fn is_empty(&self) -> bool {
        self.significant().next().is_none()
    }
}

/// Statement spans over a token sequence; shared by `split` and the
/// rewriter, which needs indices into the mutable token buffer.
///
/// Trivia after a `;` belongs to the statement that follows it. A
/// trailing run after the last `;` is dropped when it is pure
/// whitespace and kept as a final statement otherwise.
pub fn statement_ranges(tokens: &[Token]) -> Vec<Range<usize>> {
    let limit = tokens
        .iter()
        .position(|t| t.kind == TokenKind::EndOfInput)
        .unwrap_or(tokens.len());

    let mut ranges = Vec::new();
    let mut start = 0;
    for (i, token) in tokens[..limit].iter().enumerate() {
        if token.is_punct(";") {
            ranges.push(start..i + 1);
            start = i + 1;
        }
    }
    if start < limit {
        let trailing = &tokens[start..limit];
        let pure_whitespace = trailing
            .iter()
            .all(|t| matches!(t.kind, TokenKind::Whitespace | TokenKind::Newline));
        if !pure_whitespace {
            ranges.push(start..limit);
        }
    }
    ranges
}

/// Group tokens into statements.
pub fn split(tokens: &[Token]) -> Vec<Statement<'_>> {
    statement_ranges(tokens)
        .into_iter()
        .enumerate()
        .map(|(index, range)| Statement {
            index,
            range: range.clone(),
            tokens: &tokens[range],
        })
        .collect()
}

#[cfg(test)]
#[path = "splitter_test.rs"]
mod tests;
