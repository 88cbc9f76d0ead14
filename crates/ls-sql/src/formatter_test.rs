use super::*;
use crate::render::render;
use crate::splitter::split;
use crate::tokenizer::tokenize;

fn fmt(sql: &str) -> String {
    fmt_with(sql, &FormatStyle::default())
}

fn fmt_with(sql: &str, style: &FormatStyle) -> String {
    let tokens = tokenize(sql);
    let statements = split(&tokens);
    render(&format_statements(&statements, style))
}

#[test]
fn test_clause_per_line() {
    assert_eq!(
        fmt("select a, b from t where x = 1 group by a having a > 1 order by b"),
        "SELECT a, b\nFROM t\nWHERE x = 1\nGROUP BY a\nHAVING a > 1\nORDER BY b"
    );
}

#[test]
fn test_case_canonicalization_leaves_identifiers() {
    assert_eq!(fmt("select * from t"), "SELECT *\nFROM t");
}

#[test]
fn test_lowercase_style() {
    let style = FormatStyle {
        keyword_case: KeywordCase::Lower,
        ..FormatStyle::default()
    };
    assert_eq!(fmt_with("SELECT A FROM T", &style), "select A\nfrom T");
}

#[test]
fn test_preserve_style() {
    let style = FormatStyle {
        keyword_case: KeywordCase::Preserve,
        ..FormatStyle::default()
    };
    assert_eq!(fmt_with("Select a From t", &style), "Select a\nFrom t");
}

#[test]
fn test_tight_punctuation() {
    assert_eq!(
        fmt("select f ( a , b ) from s . t"),
        "SELECT f(a, b)\nFROM s.t"
    );
}

#[test]
fn test_cast_binds_tight() {
    assert_eq!(
        fmt("select cast ( x as int ) from t"),
        "SELECT CAST(x AS int)\nFROM t"
    );
}

#[test]
fn test_count_star() {
    assert_eq!(fmt("select count ( * ) from t"), "SELECT count(*)\nFROM t");
}

#[test]
fn test_double_colon_cast_tight() {
    assert_eq!(fmt("select x :: int from t"), "SELECT x::int\nFROM t");
}

#[test]
fn test_unary_minus_glued() {
    assert_eq!(
        fmt("select -1 from t where x = -2"),
        "SELECT -1\nFROM t\nWHERE x = -2"
    );
}

#[test]
fn test_binary_minus_spaced() {
    assert_eq!(fmt("select a-b from t"), "SELECT a - b\nFROM t");
}

#[test]
fn test_join_chain_one_line_each() {
    assert_eq!(
        fmt("select * from a inner join b on a.id = b.id left outer join c on c.id = a.id"),
        "SELECT *\nFROM a\nINNER JOIN b ON a.id = b.id\nLEFT OUTER JOIN c ON c.id = a.id"
    );
}

#[test]
fn test_union_on_own_line() {
    assert_eq!(
        fmt("select 1 union all select 2"),
        "SELECT 1\nUNION ALL\nSELECT 2"
    );
}

#[test]
fn test_subquery_stays_inline() {
    assert_eq!(
        fmt("select a from ( select a from t ) sub"),
        "SELECT a\nFROM (SELECT a FROM t) sub"
    );
}

#[test]
fn test_select_list_wraps_when_long() {
    let style = FormatStyle {
        max_line_length: 20,
        ..FormatStyle::default()
    };
    assert_eq!(
        fmt_with("select alpha, beta, gamma from t", &style),
        "SELECT\n    alpha,\n    beta,\n    gamma\nFROM t"
    );
}

#[test]
fn test_select_wrap_respects_nested_commas() {
    let style = FormatStyle {
        max_line_length: 20,
        ..FormatStyle::default()
    };
    assert_eq!(
        fmt_with("select f(a, b), gamma from t", &style),
        "SELECT\n    f(a, b),\n    gamma\nFROM t"
    );
}

#[test]
fn test_short_select_not_wrapped() {
    assert_eq!(fmt("select a, b from t"), "SELECT a, b\nFROM t");
}

#[test]
fn test_wrap_indent_width_honored() {
    let style = FormatStyle {
        max_line_length: 10,
        indent_width: 2,
        ..FormatStyle::default()
    };
    assert_eq!(
        fmt_with("select aaaa, bbbb from t", &style),
        "SELECT\n  aaaa,\n  bbbb\nFROM t"
    );
}

#[test]
fn test_trailing_line_comment_stays_attached() {
    assert_eq!(
        fmt("select a, -- keep me\n b from t"),
        "SELECT a, -- keep me\n    b\nFROM t"
    );
}

#[test]
fn test_own_line_comment_kept() {
    assert_eq!(
        fmt("-- header\nselect 1"),
        "-- header\nSELECT 1"
    );
}

#[test]
fn test_block_comment_inline() {
    assert_eq!(
        fmt("select a /* note */ from t"),
        "SELECT a /* note */\nFROM t"
    );
}

#[test]
fn test_string_and_quoted_identifier_untouched() {
    assert_eq!(
        fmt("select 'FROM x', \"From\" from t"),
        "SELECT 'FROM x', \"From\"\nFROM t"
    );
}

#[test]
fn test_statements_join_with_separator() {
    assert_eq!(fmt("select 1; select 2;"), "SELECT 1;\nSELECT 2");
}

#[test]
fn test_empty_statements_skipped() {
    assert_eq!(fmt("select 1;;select 2"), "SELECT 1;\nSELECT 2");
}

#[test]
fn test_trailing_comment_only_statement() {
    assert_eq!(fmt("select 1;\n-- done\n"), "SELECT 1;\n-- done");
}

#[test]
fn test_separator_moves_off_comment_line() {
    assert_eq!(
        fmt("select 1 -- c\n; select 2"),
        "SELECT 1 -- c\n;\nSELECT 2"
    );
}

#[test]
fn test_whitespace_only_input() {
    assert_eq!(fmt("   \n\t "), "");
    assert_eq!(fmt(""), "");
}

#[test]
fn test_idempotent() {
    let inputs = [
        "select a, b from t where x = 1",
        "select alpha, beta, gamma, delta, epsilon, zeta, eta, theta, iota, kappa from wide_table",
        "select a, -- keep\n b from t",
        "select * from a join b on a.id = b.id;\nselect 2;",
        "-- header\nselect 1",
        "select f(a, b), x :: int, -1 from s.t",
        "with x as (select 1) select * from x",
    ];
    for input in inputs {
        let once = fmt(input);
        let twice = fmt(&once);
        assert_eq!(twice, once, "not idempotent for: {input}");
    }
}

#[test]
fn test_unrecognized_statement_passes_through_single_line() {
    assert_eq!(
        fmt("create   table t ( x int )"),
        "CREATE TABLE t(x int)"
    );
}
