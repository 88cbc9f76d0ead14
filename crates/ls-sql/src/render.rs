//! Token-to-text rendering
//!
//! The single serialization path shared by the formatter and the
//! rewriter: token sequences in, deterministic text out. The formatter
//! emits through [`TokenBuilder`] so its synthesized tokens carry the
//! same offset/line/column invariants as tokenizer output.

use crate::splitter::Statement;
use crate::token::{Token, TokenKind};

/// Concatenate token text in order.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Concatenate statements exactly as split, separators and trivia
/// included.
pub fn render_statements(statements: &[Statement<'_>]) -> String {
    statements
        .iter()
        .flat_map(|s| s.tokens.iter())
        .map(|t| t.text.as_str())
        .collect()
}

/// Builds a token sequence while tracking offsets, lines, and columns,
/// so synthesized output upholds the token model's invariants.
#[derive(Debug, Default)]
pub struct TokenBuilder {
    tokens: Vec<Token>,
    offset: usize,
    line: usize,
    column: usize,
}

impl TokenBuilder {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Append a token with the given kind and text.
    pub fn push(&mut self, kind: TokenKind, text: &str) {
        let start = self.offset;
        let line = self.line;
        let column = self.column;
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
        self.tokens.push(Token {
            kind,
            text: text.to_string(),
            start,
            end: self.offset,
            line,
            column,
            truncated: false,
        });
    }

    /// Append an already-lexed token, keeping its kind and text but
    /// re-anchoring its position in the output.
    pub fn push_token(&mut self, token: &Token) {
        self.push(token.kind, &token.text);
    }

    /// Append a single space.
    pub fn space(&mut self) {
        self.push(TokenKind::Whitespace, " ");
    }

    /// Append a line break.
    pub fn newline(&mut self) {
        self.push(TokenKind::Newline, "\n");
    }

    /// Append `width` spaces of indentation (no token for zero width).
    pub fn indent(&mut self, width: usize) {
        if width > 0 {
            self.push(TokenKind::Whitespace, &" ".repeat(width));
        }
    }

    /// Kind of the most recently pushed token.
    pub fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|t| t.kind)
    }

    /// Rendered text of everything pushed so far.
    pub fn text(&self) -> String {
        render(&self.tokens)
    }

    /// True when nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Finish with a terminal `EndOfInput` token.
    pub fn finish(mut self) -> Vec<Token> {
        self.push(TokenKind::EndOfInput, "");
        self.tokens
    }
}
