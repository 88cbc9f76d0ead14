//! Permissive, lossless SQL tokenizer
//!
//! Tokenization never fails: an unterminated string literal, quoted
//! identifier, or block comment swallows the rest of the input as one
//! token with its `truncated` flag set, so batch callers can detect the
//! condition without error-based control flow.

use crate::keyword;
use crate::token::{Token, TokenKind};

/// Decompose SQL text into an ordered token sequence.
///
/// The last token is always `EndOfInput` with empty text; concatenating
/// every token's text reproduces the input byte-for-byte.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

const TWO_CHAR_OPERATORS: &[&str] = &["<=", ">=", "<>", "!=", "::", "||"];

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            // \r of a \r\n pair is part of the break the \n accounts for
            '\r' if self.peek() == Some('\n') => {}
            '\r' => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
        Some(c)
    }

    fn next_token(&mut self) -> Token {
        let start = self.pos;
        let line = self.line;
        let column = self.column;

        let Some(c) = self.peek() else {
            return self.make(TokenKind::EndOfInput, start, line, column, false);
        };

        let (kind, truncated) = match c {
            '\n' | '\r' => {
                self.bump();
                if c == '\r' && self.peek() == Some('\n') {
                    self.bump();
                }
                (TokenKind::Newline, false)
            }
            c if c.is_whitespace() => {
                while let Some(w) = self.peek() {
                    if w.is_whitespace() && w != '\n' && w != '\r' {
                        self.bump();
                    } else {
                        break;
                    }
                }
                (TokenKind::Whitespace, false)
            }
            '-' if self.peek_at(1) == Some('-') => {
                while let Some(w) = self.peek() {
                    if w == '\n' || w == '\r' {
                        break;
                    }
                    self.bump();
                }
                (TokenKind::LineComment, false)
            }
            '/' if self.peek_at(1) == Some('*') => self.block_comment(line, column),
            '\'' => self.delimited(TokenKind::StringLiteral, '\'', line, column),
            '"' => self.delimited(TokenKind::QuotedIdentifier, '"', line, column),
            '`' => self.delimited(TokenKind::QuotedIdentifier, '`', line, column),
            c if c.is_ascii_alphabetic() || c == '_' => {
                while let Some(w) = self.peek() {
                    if w.is_ascii_alphanumeric() || w == '_' {
                        self.bump();
                    } else {
                        break;
                    }
                }
                if keyword::is_reserved(&self.src[start..self.pos]) {
                    (TokenKind::Keyword, false)
                } else {
                    (TokenKind::Identifier, false)
                }
            }
            c if c.is_ascii_digit() => {
                self.digits();
                if self.peek() == Some('.') {
                    self.bump();
                    self.digits();
                }
                self.exponent();
                (TokenKind::NumberLiteral, false)
            }
            '.' if self.peek_at(1).is_some_and(|d| d.is_ascii_digit()) => {
                self.bump();
                self.digits();
                self.exponent();
                (TokenKind::NumberLiteral, false)
            }
            _ => {
                if TWO_CHAR_OPERATORS
                    .iter()
                    .any(|op| self.src[self.pos..].starts_with(op))
                {
                    self.bump();
                    self.bump();
                    (TokenKind::Operator, false)
                } else {
                    self.bump();
                    if "()[],;.".contains(c) {
                        (TokenKind::Punctuation, false)
                    } else if "+-*/%<>=!|&^~:?".contains(c) {
                        (TokenKind::Operator, false)
                    } else {
                        // unknown characters degrade to punctuation so
                        // tokenization stays total
                        (TokenKind::Punctuation, false)
                    }
                }
            }
        };

        self.make(kind, start, line, column, truncated)
    }

    fn digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
    }

    fn exponent(&mut self) {
        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = if matches!(self.peek_at(1), Some('+' | '-')) {
                2
            } else {
                1
            };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..=digit_at {
                    self.bump();
                }
                self.digits();
            }
        }
    }

    fn delimited(
        &mut self,
        kind: TokenKind,
        delim: char,
        line: usize,
        column: usize,
    ) -> (TokenKind, bool) {
        self.bump();
        loop {
            match self.peek() {
                None => {
                    log::warn!(
                        "unterminated {} at line {line}, column {column} swallowed to end of input",
                        describe(kind)
                    );
                    return (kind, true);
                }
                Some(c) if c == delim => {
                    self.bump();
                    // doubled delimiter is an escape, keep scanning
                    if self.peek() == Some(delim) {
                        self.bump();
                    } else {
                        return (kind, false);
                    }
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn block_comment(&mut self, line: usize, column: usize) -> (TokenKind, bool) {
        self.bump();
        self.bump();
        let mut depth = 1usize;
        while depth > 0 {
            if self.src[self.pos..].starts_with("*/") {
                self.bump();
                self.bump();
                depth -= 1;
            } else if self.src[self.pos..].starts_with("/*") {
                self.bump();
                self.bump();
                depth += 1;
            } else if self.bump().is_none() {
                log::warn!(
                    "unterminated block comment at line {line}, column {column} swallowed to end of input"
                );
                return (TokenKind::BlockComment, true);
            }
        }
        (TokenKind::BlockComment, false)
    }

    fn make(
        &self,
        kind: TokenKind,
        start: usize,
        line: usize,
        column: usize,
        truncated: bool,
    ) -> Token {
        Token {
            kind,
            text: self.src[start..self.pos].to_string(),
            start,
            end: self.pos,
            line,
            column,
            truncated,
        }
    }
}

fn describe(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::StringLiteral => "string literal",
        TokenKind::QuotedIdentifier => "quoted identifier",
        TokenKind::BlockComment => "block comment",
        _ => "token",
    }
}

#[cfg(test)]
#[path = "tokenizer_test.rs"]
mod tests;
