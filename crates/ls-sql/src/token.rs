//! Lossless token model
//!
//! Tokens carry their exact source text; concatenating every token's text
//! in order reproduces the input byte-for-byte. Offsets always describe
//! the source the token was lexed from, so they stay meaningful as
//! anchors even after a rewrite replaces a token's text.

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word (`SELECT`, `FROM`, ...)
    Keyword,
    /// Bare identifier (`orders`, `customer_id`)
    Identifier,
    /// Delimited identifier (`` `name` `` or `"name"`)
    QuotedIdentifier,
    /// Single-quoted string literal
    StringLiteral,
    /// Integer, decimal, or exponent-form number
    NumberLiteral,
    /// Symbolic operator (`=`, `<=`, `::`, ...)
    Operator,
    /// Structural punctuation (`(`, `)`, `,`, `;`, `.`, `[`, `]`)
    Punctuation,
    /// `--` comment running to end of line
    LineComment,
    /// `/* ... */` comment, possibly nested
    BlockComment,
    /// Run of spaces/tabs (newlines excluded)
    Whitespace,
    /// A single line break (`\n`, `\r\n`, or lone `\r`)
    Newline,
    /// Zero-width terminal token
    EndOfInput,
}

impl TokenKind {
    /// Whitespace, newlines, and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    /// Line or block comment.
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

/// A single lexed token. Immutable once produced by the tokenizer; the
/// rewriter replaces `text` on identifier tokens it retargets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text (or replacement text after a rewrite)
    pub text: String,
    /// Byte offset of the first byte in the source
    pub start: usize,
    /// Byte offset one past the last byte in the source
    pub end: usize,
    /// 1-based source line of the token's first character
    pub line: usize,
    /// 1-based source column (in characters) of the token's first character
    pub column: usize,
    /// True when an unterminated string, quoted identifier, or block
    /// comment swallowed the rest of the input
    pub truncated: bool,
}

impl Token {
    /// Trivia: whitespace, newlines, comments.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Punctuation token with exactly the given text.
    pub fn is_punct(&self, text: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.text == text
    }

    /// Keyword token matching the given word case-insensitively.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text.eq_ignore_ascii_case(word)
    }
}
