//! Change records produced by the qualifier rewriter

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};

/// Token-index span of a rewritten name in the tokenized file.
///
/// `start` is inclusive, `end` exclusive, both indices into the full
/// token sequence returned by tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

/// One qualified name actually modified by a rewrite.
///
/// Unmodified matches produce no record. The caller logs these or folds
/// them into a report of what changed per file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Zero-based index of the statement containing the name
    pub statement_index: usize,

    /// The name as originally written (segments and dots, no trivia)
    pub original_text: String,

    /// The name after substitution
    pub rewritten_text: String,

    /// Span of the name's tokens in the tokenized file
    pub token_range: TokenRange,
}

/// Serialize change records as a JSON array for report output.
pub fn to_json(changes: &[ChangeRecord]) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(changes)?)
}
