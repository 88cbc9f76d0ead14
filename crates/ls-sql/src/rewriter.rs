//! Qualifier rewriting for table references
//!
//! Scans each statement with a small explicit state machine: a
//! `FROM`/`JOIN`/`UPDATE`/`INTO` keyword arms the scanner, the next
//! dot-joined identifier chain is taken as a table reference, and its
//! catalog/schema segments are substituted per the rule. Strings,
//! comments, aliases, subqueries, and bare names are left untouched,
//! and the pass never fails.

use crate::keyword;
use crate::splitter::statement_ranges;
use crate::token::{Token, TokenKind};
use ls_core::{ChangeRecord, RewriteRule, TokenRange, TwoPartPolicy};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Seeking,
    ExpectName,
}

/// Apply `rule` to every qualified table reference in the token
/// sequence, in place. Returns one record per name actually changed.
pub fn rewrite_tokens(tokens: &mut [Token], rule: &RewriteRule) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    if rule.is_noop() {
        return changes;
    }
    for (statement_index, range) in statement_ranges(tokens).into_iter().enumerate() {
        scan_statement(tokens, range, statement_index, rule, &mut changes);
    }
    changes
}

fn scan_statement(
    tokens: &mut [Token],
    range: Range<usize>,
    statement_index: usize,
    rule: &RewriteRule,
    changes: &mut Vec<ChangeRecord>,
) {
    let mut state = ScanState::Seeking;
    let mut depth = 0i32;
    // depth of the FROM list whose commas re-arm the scanner, if any
    let mut from_list_depth: Option<i32> = None;

    let mut i = range.start;
    while i < range.end {
        if tokens[i].is_trivia() {
            i += 1;
            continue;
        }
        match tokens[i].kind {
            TokenKind::Punctuation => {
                match tokens[i].text.as_str() {
                    "(" => {
                        depth += 1;
                        state = ScanState::Seeking;
                    }
                    ")" => {
                        depth -= 1;
                        if from_list_depth.is_some_and(|d| depth < d) {
                            from_list_depth = None;
                        }
                        state = ScanState::Seeking;
                    }
                    "," => {
                        if from_list_depth == Some(depth) {
                            state = ScanState::ExpectName;
                        }
                    }
                    _ => state = ScanState::Seeking,
                }
                i += 1;
            }
            TokenKind::Keyword => {
                let word = tokens[i].text.to_ascii_uppercase();
                if keyword::is_name_trigger(&word) {
                    state = ScanState::ExpectName;
                    from_list_depth = if word == "FROM" { Some(depth) } else { None };
                } else if word != "AS" {
                    if from_list_depth == Some(depth) {
                        from_list_depth = None;
                    }
                    state = ScanState::Seeking;
                }
                i += 1;
            }
            TokenKind::Identifier | TokenKind::QuotedIdentifier
                if state == ScanState::ExpectName =>
            {
                i = consume_name(tokens, i, range.end, statement_index, rule, changes);
                state = ScanState::Seeking;
            }
            _ => {
                state = ScanState::Seeking;
                i += 1;
            }
        }
    }
}

/// Consume a dot-joined identifier chain starting at `start` and apply
/// the rule to it. Returns the index scanning resumes at.
fn consume_name(
    tokens: &mut [Token],
    start: usize,
    end: usize,
    statement_index: usize,
    rule: &RewriteRule,
    changes: &mut Vec<ChangeRecord>,
) -> usize {
    let mut segments = vec![start];
    let mut cursor = start + 1;
    while segments.len() < 3 {
        let Some(dot) = next_significant(tokens, cursor, end) else {
            break;
        };
        if !tokens[dot].is_punct(".") {
            break;
        }
        let Some(seg) = next_significant(tokens, dot + 1, end) else {
            return dot + 1;
        };
        if !matches!(
            tokens[seg].kind,
            TokenKind::Identifier | TokenKind::QuotedIdentifier
        ) {
            // dangling dot: not a table reference, leave untouched
            return seg;
        }
        segments.push(seg);
        cursor = seg + 1;
    }
    let last = *segments.last().unwrap_or(&start);

    // four or more dotted segments is not a shape we rewrite
    if segments.len() == 3 {
        if let Some(next) = next_significant(tokens, cursor, end) {
            if tokens[next].is_punct(".") {
                return skip_dotted_run(tokens, cursor, end);
            }
        }
    }

    // a name applied to arguments is a table-valued call, not a table
    if let Some(next) = next_significant(tokens, cursor, end) {
        if tokens[next].is_punct("(") {
            return cursor;
        }
    }

    let (catalog_idx, database_idx) = match segments.len() {
        3 => (Some(segments[0]), Some(segments[1])),
        2 => match rule.two_part_policy {
            TwoPartPolicy::Database => (None, Some(segments[0])),
            TwoPartPolicy::Catalog => (Some(segments[0]), None),
        },
        _ => (None, None),
    };

    let original = name_text(tokens, start, last);
    let mut changed = false;
    if let (Some(idx), Some(new_name)) = (catalog_idx, rule.new_catalog.as_deref()) {
        changed |= replace_segment(&mut tokens[idx], new_name);
    }
    if let (Some(idx), Some(new_name)) = (database_idx, rule.new_database.as_deref()) {
        changed |= replace_segment(&mut tokens[idx], new_name);
    }
    if changed {
        let rewritten = name_text(tokens, start, last);
        log::debug!("retargeted table reference {original} -> {rewritten}");
        changes.push(ChangeRecord {
            statement_index,
            original_text: original,
            rewritten_text: rewritten,
            token_range: TokenRange {
                start,
                end: last + 1,
            },
        });
    }
    cursor
}

/// Replace a segment's text, preserving its quoting style. Returns
/// whether the text actually changed.
fn replace_segment(token: &mut Token, new_name: &str) -> bool {
    let new_text = if token.kind == TokenKind::QuotedIdentifier {
        let delim = token.text.chars().next().unwrap_or('"');
        let escaped = new_name.replace(delim, &format!("{delim}{delim}"));
        format!("{delim}{escaped}{delim}")
    } else {
        new_name.to_string()
    };
    if token.text == new_text {
        return false;
    }
    token.text = new_text;
    true
}

/// The name as written: segment and dot tokens only, trivia dropped.
fn name_text(tokens: &[Token], first: usize, last: usize) -> String {
    tokens[first..=last]
        .iter()
        .filter(|t| !t.is_trivia())
        .map(|t| t.text.as_str())
        .collect()
}

fn next_significant(tokens: &[Token], from: usize, end: usize) -> Option<usize> {
    (from..end).find(|&i| !tokens[i].is_trivia())
}

/// Skip past the remainder of an overlong dotted chain.
fn skip_dotted_run(tokens: &[Token], mut cursor: usize, end: usize) -> usize {
    loop {
        match next_significant(tokens, cursor, end) {
            Some(i) if tokens[i].is_punct(".") => match next_significant(tokens, i + 1, end) {
                Some(j)
                    if matches!(
                        tokens[j].kind,
                        TokenKind::Identifier | TokenKind::QuotedIdentifier
                    ) =>
                {
                    cursor = j + 1;
                }
                _ => return i + 1,
            },
            _ => return cursor,
        }
    }
}

#[cfg(test)]
#[path = "rewriter_test.rs"]
mod tests;
