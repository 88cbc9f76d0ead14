//! Canonical SQL formatter
//!
//! Re-emits a token sequence as canonicalized text: normalized keyword
//! casing, tight/loose spacing around punctuation, one line per
//! top-level clause, and best-effort wrapping of long SELECT lists.
//! Formatting is idempotent and never fails on lexically valid input;
//! constructs it does not recognize pass through with spacing rules
//! only.

use crate::keyword;
use crate::render::TokenBuilder;
use crate::splitter::Statement;
use crate::token::{Token, TokenKind};
use ls_core::{FormatStyle, KeywordCase};

/// One significant token with the comments that trailed it on its
/// original line, or a comment that stood on a line of its own.
enum LineItem<'a> {
    Sig {
        token: &'a Token,
        trailing: Vec<&'a Token>,
    },
    Comment(&'a Token),
}

struct Line<'a> {
    indent: usize,
    items: Vec<LineItem<'a>>,
}

/// Format statements into a fresh token sequence; statements join with
/// `;` + newline and the output carries no trailing separator.
pub fn format_statements(statements: &[Statement<'_>], style: &FormatStyle) -> Vec<Token> {
    let mut out = TokenBuilder::new();
    let mut prev_had_content = false;
    for statement in statements {
        let lines = wrap_long_select_lines(layout(statement, style), style);
        if lines.is_empty() {
            continue;
        }
        if !out.is_empty() {
            if prev_had_content {
                // a trailing line comment would swallow the separator
                if out.last_kind() == Some(TokenKind::LineComment) {
                    out.newline();
                }
                out.push(TokenKind::Punctuation, ";");
            }
            out.newline();
        }
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            emit_line(line, style, &mut out);
        }
        prev_had_content = !statement.is_empty();
    }
    out.finish()
}

/// Attach comments to the significant token that precedes them on the
/// same source line; comments after a line break stand alone.
fn collect_items<'a>(statement: &Statement<'a>) -> Vec<LineItem<'a>> {
    let mut items: Vec<LineItem<'a>> = Vec::new();
    let mut line_break_since_sig = true;
    for token in statement.tokens {
        match token.kind {
            TokenKind::Whitespace | TokenKind::EndOfInput => {}
            TokenKind::Newline => line_break_since_sig = true,
            TokenKind::LineComment | TokenKind::BlockComment => {
                let attach =
                    !line_break_since_sig && matches!(items.last(), Some(LineItem::Sig { .. }));
                if attach {
                    if let Some(LineItem::Sig { trailing, .. }) = items.last_mut() {
                        trailing.push(token);
                    }
                } else {
                    items.push(LineItem::Comment(token));
                }
            }
            _ => {
                if !token.is_punct(";") {
                    items.push(LineItem::Sig {
                        token,
                        trailing: Vec::new(),
                    });
                    line_break_since_sig = false;
                }
            }
        }
    }
    items
}

/// Group items into lines: one line per top-level clause, continuation
/// lines after a line comment, own-line comments kept on their own line.
fn layout<'a>(statement: &Statement<'a>, style: &FormatStyle) -> Vec<Line<'a>> {
    let mut lines: Vec<Line<'a>> = Vec::new();
    let mut current: Vec<LineItem<'a>> = Vec::new();
    let mut current_indent = 0usize;
    let mut depth = 0i32;
    let mut force_break = false;
    let mut prev_sig: Option<&'a Token> = None;

    for item in collect_items(statement) {
        match item {
            LineItem::Comment(_) => {
                if !current.is_empty() {
                    lines.push(Line {
                        indent: current_indent,
                        items: std::mem::take(&mut current),
                    });
                }
                lines.push(Line {
                    indent: 0,
                    items: vec![item],
                });
                current_indent = 0;
                force_break = false;
            }
            LineItem::Sig { token, ref trailing } => {
                if token.is_punct(")") || token.is_punct("]") {
                    depth -= 1;
                }
                let clause_break = depth == 0
                    && token.kind == TokenKind::Keyword
                    && starts_clause_line(token, prev_sig);
                if !current.is_empty() && (force_break || clause_break) {
                    lines.push(Line {
                        indent: current_indent,
                        items: std::mem::take(&mut current),
                    });
                    current_indent = if clause_break { 0 } else { style.indent_width };
                }
                force_break = trailing.iter().any(|c| c.kind == TokenKind::LineComment);
                if token.is_punct("(") || token.is_punct("[") {
                    depth += 1;
                }
                prev_sig = Some(token);
                current.push(item);
            }
        }
    }
    if !current.is_empty() {
        lines.push(Line {
            indent: current_indent,
            items: current,
        });
    }
    lines
}

/// Newline before clause keywords and before the first word of a join
/// phrase (`LEFT OUTER JOIN` breaks once, before `LEFT`).
fn starts_clause_line(token: &Token, prev: Option<&Token>) -> bool {
    if keyword::is_clause_start(&token.text) {
        return true;
    }
    if keyword::is_join_word(&token.text) {
        return !prev
            .is_some_and(|p| p.kind == TokenKind::Keyword && keyword::is_join_word(&p.text));
    }
    false
}

/// Break a too-long `SELECT` line into one item per line. Best-effort:
/// items longer than the limit on their own still emit.
fn wrap_long_select_lines<'a>(lines: Vec<Line<'a>>, style: &FormatStyle) -> Vec<Line<'a>> {
    let mut out = Vec::new();
    for line in lines {
        let is_select_line = line.indent == 0
            && matches!(
                line.items.first(),
                Some(LineItem::Sig { token, .. }) if token.is_keyword("SELECT")
            );
        if !is_select_line || line_width(&line, style) <= style.max_line_length {
            out.push(line);
            continue;
        }

        let mut rest = line.items;
        let mut header = vec![rest.remove(0)];
        while matches!(
            rest.first(),
            Some(LineItem::Sig { token, .. })
                if token.is_keyword("DISTINCT") || token.is_keyword("ALL")
        ) {
            header.push(rest.remove(0));
        }
        if rest.is_empty() {
            out.push(Line {
                indent: 0,
                items: header,
            });
            continue;
        }
        out.push(Line {
            indent: 0,
            items: header,
        });

        let mut group: Vec<LineItem<'a>> = Vec::new();
        let mut depth = 0i32;
        for item in rest {
            let mut comma_at_top = false;
            if let LineItem::Sig { token, .. } = &item {
                if token.is_punct(")") || token.is_punct("]") {
                    depth -= 1;
                }
                if token.is_punct("(") || token.is_punct("[") {
                    depth += 1;
                }
                comma_at_top = token.is_punct(",") && depth == 0;
            }
            group.push(item);
            if comma_at_top {
                out.push(Line {
                    indent: style.indent_width,
                    items: std::mem::take(&mut group),
                });
            }
        }
        if !group.is_empty() {
            out.push(Line {
                indent: style.indent_width,
                items: group,
            });
        }
    }
    out
}

fn line_width(line: &Line<'_>, style: &FormatStyle) -> usize {
    let mut probe = TokenBuilder::new();
    emit_line(line, style, &mut probe);
    probe.text().chars().count()
}

fn emit_line(line: &Line<'_>, style: &FormatStyle, out: &mut TokenBuilder) {
    out.indent(line.indent);
    let mut prev: Option<&Token> = None;
    let mut glue_next = false;
    for item in &line.items {
        match item {
            LineItem::Comment(comment) => {
                out.push_token(comment);
                prev = Some(*comment);
            }
            LineItem::Sig { token, trailing } => {
                if let Some(p) = prev {
                    if !glue_next && need_space(p, token) {
                        out.space();
                    }
                }
                out.push(token.kind, &cased_text(token, style));
                glue_next = is_unary_sign(token, prev);
                prev = Some(*token);
                for comment in trailing {
                    out.space();
                    out.push_token(comment);
                    prev = Some(*comment);
                }
            }
        }
    }
}

fn cased_text(token: &Token, style: &FormatStyle) -> String {
    if token.kind == TokenKind::Keyword {
        match style.keyword_case {
            KeywordCase::Upper => token.text.to_ascii_uppercase(),
            KeywordCase::Lower => token.text.to_ascii_lowercase(),
            KeywordCase::Preserve => token.text.clone(),
        }
    } else {
        token.text.clone()
    }
}

/// Spacing between two adjacent tokens on one line.
fn need_space(prev: &Token, next: &Token) -> bool {
    if prev.kind.is_comment() || next.kind.is_comment() {
        return true;
    }
    if prev.is_punct("(") || prev.is_punct("[") || prev.is_punct(".") {
        return false;
    }
    if prev.kind == TokenKind::Operator && prev.text == "::" {
        return false;
    }
    if next.is_punct(")")
        || next.is_punct("]")
        || next.is_punct(",")
        || next.is_punct(";")
        || next.is_punct(".")
    {
        return false;
    }
    if next.kind == TokenKind::Operator && next.text == "::" {
        return false;
    }
    if next.is_punct("(") {
        // call syntax binds tight: f(x), "q"(x), CAST(x AS t)
        if matches!(
            prev.kind,
            TokenKind::Identifier | TokenKind::QuotedIdentifier
        ) || prev.is_keyword("CAST")
        {
            return false;
        }
    }
    if next.is_punct("[")
        && matches!(
            prev.kind,
            TokenKind::Identifier | TokenKind::QuotedIdentifier
        )
    {
        return false;
    }
    true
}

/// A `-`/`+` in unary position glues to its operand.
fn is_unary_sign(token: &Token, prev: Option<&Token>) -> bool {
    if token.kind != TokenKind::Operator || (token.text != "-" && token.text != "+") {
        return false;
    }
    match prev {
        None => true,
        Some(p) => {
            p.kind == TokenKind::Operator
                || p.kind == TokenKind::Keyword
                || p.is_punct("(")
                || p.is_punct("[")
                || p.is_punct(",")
        }
    }
}

#[cfg(test)]
#[path = "formatter_test.rs"]
mod tests;
