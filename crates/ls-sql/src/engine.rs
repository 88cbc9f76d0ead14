//! Text-in/text-out entry points
//!
//! The four operations the surrounding tooling calls: tokenize, format,
//! rewrite, and the combined pass that tokenizes once and renders once.
//! Configuration is validated here, before any text is touched; the
//! passes themselves never fail.

use crate::formatter::format_statements;
use crate::render::render;
use crate::rewriter::rewrite_tokens;
use crate::splitter::split;
use crate::token::Token;
use crate::tokenizer;
use ls_core::{ChangeRecord, CoreResult, FormatStyle, RewriteRule};

/// Tokenize SQL text losslessly.
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenizer::tokenize(text)
}

/// Canonically format SQL text.
///
/// Idempotent: formatting already-formatted text is a fixed point.
///
/// # Examples
/// ```
/// use ls_core::FormatStyle;
/// let out = ls_sql::format("select id from t where x = 1", &FormatStyle::default()).unwrap();
/// assert_eq!(out, "SELECT id\nFROM t\nWHERE x = 1");
/// ```
pub fn format(text: &str, style: &FormatStyle) -> CoreResult<String> {
    style.validate()?;
    let tokens = tokenizer::tokenize(text);
    let statements = split(&tokens);
    Ok(render(&format_statements(&statements, style)))
}

/// Retarget catalog/schema qualifiers of table references, leaving all
/// other text byte-for-byte intact.
///
/// # Examples
/// ```
/// use ls_core::RewriteRule;
/// let rule = RewriteRule {
///     new_catalog: Some("dev".to_string()),
///     ..RewriteRule::default()
/// };
/// let (out, changes) = ls_sql::rewrite("SELECT 1 FROM prod.sales.orders", &rule).unwrap();
/// assert_eq!(out, "SELECT 1 FROM dev.sales.orders");
/// assert_eq!(changes.len(), 1);
/// ```
pub fn rewrite(text: &str, rule: &RewriteRule) -> CoreResult<(String, Vec<ChangeRecord>)> {
    rule.validate()?;
    let mut tokens = tokenizer::tokenize(text);
    let changes = rewrite_tokens(&mut tokens, rule);
    if !changes.is_empty() {
        log::debug!("retargeted {} table reference(s)", changes.len());
    }
    Ok((render(&tokens), changes))
}

/// Rewrite qualifiers and format in one pass: a single tokenization and
/// a single render.
pub fn format_and_rewrite(
    text: &str,
    style: &FormatStyle,
    rule: &RewriteRule,
) -> CoreResult<(String, Vec<ChangeRecord>)> {
    style.validate()?;
    rule.validate()?;
    let mut tokens = tokenizer::tokenize(text);
    let changes = rewrite_tokens(&mut tokens, rule);
    let statements = split(&tokens);
    Ok((render(&format_statements(&statements, style)), changes))
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
