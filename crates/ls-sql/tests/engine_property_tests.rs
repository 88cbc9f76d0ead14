//! End-to-end property tests for the lexical engine

use ls_core::{FormatStyle, RewriteRule, TwoPartPolicy};
use ls_sql::{format, format_and_rewrite, render, rewrite, tokenize};

fn dev_catalog() -> RewriteRule {
    RewriteRule {
        new_catalog: Some("dev".to_string()),
        ..RewriteRule::default()
    }
}

// ── Losslessness ────────────────────────────────────────────────────────

#[test]
fn test_tokenize_render_round_trips_everything() {
    let corpus = [
        "SELECT * FROM prod.sales.orders o JOIN prod.sales.customers c ON o.id = c.id",
        "select\n\t1\r\n;;  -- trailing\n",
        "SELECT 'it''s', \"col;name\", `weird``id` FROM t",
        "/* nested /* comment */ here */ SELECT 1.5e-3::float",
        "INSERT INTO a.b.c VALUES (1, 'x'), (2, 'y');",
        "SELECT 'unterminated string runs to the end",
        "/* unterminated block comment",
        "",
        "\n\n\n",
        "garbage @#$%^&* but still lossless",
    ];
    for sql in corpus {
        assert_eq!(render(&tokenize(sql)), sql, "lossless failed for: {sql}");
    }
}

// ── Format idempotence ──────────────────────────────────────────────────

#[test]
fn test_format_is_idempotent() {
    let style = FormatStyle::default();
    let corpus = [
        "select a,b,c from prod.sales.orders where a>1 and b<2",
        "select customer_id, first_name, last_name, email_address, phone_number, \
         street_address, city_name, postal_code from crm.contacts",
        "select 1 union all select 2 union select 3",
        "with base as (select id from t) select * from base join u on base.id = u.id",
        "select a, -- tail comment\n b from t;\n-- footer",
        "update prod.sales.orders set status = 'done' where id = 7",
    ];
    for sql in corpus {
        let once = format(sql, &style).unwrap();
        let twice = format(&once, &style).unwrap();
        assert_eq!(twice, once, "format not idempotent for: {sql}");
    }
}

#[test]
fn test_format_idempotent_under_every_keyword_case() {
    for keyword_case in [
        ls_core::KeywordCase::Upper,
        ls_core::KeywordCase::Lower,
        ls_core::KeywordCase::Preserve,
    ] {
        let style = FormatStyle {
            keyword_case,
            ..FormatStyle::default()
        };
        let once = format("Select A, B From T Where X = 1", &style).unwrap();
        let twice = format(&once, &style).unwrap();
        assert_eq!(twice, once);
    }
}

// ── Rewrite precision ───────────────────────────────────────────────────

#[test]
fn test_rewrite_precision_on_join_query() {
    let sql = "SELECT * FROM prod.sales.orders o JOIN prod.sales.customers c ON o.id = c.id";
    let (out, changes) = rewrite(sql, &dev_catalog()).unwrap();
    assert!(out.contains("dev.sales.orders"));
    assert!(out.contains("dev.sales.customers"));
    assert!(out.contains(" o "));
    assert!(out.contains(" c "));
    assert_eq!(changes.len(), 2);
}

#[test]
fn test_string_and_comment_immunity() {
    let sql = "SELECT 'FROM prod.sales.orders' AS s -- FROM prod.sales.orders\nFROM t";
    let (out, changes) = rewrite(sql, &dev_catalog()).unwrap();
    assert_eq!(out, sql);
    assert!(changes.is_empty());
}

#[test]
fn test_bare_name_safety() {
    let rule = RewriteRule {
        new_catalog: Some("dev".to_string()),
        new_database: Some("stage".to_string()),
        ..RewriteRule::default()
    };
    let (out, changes) = rewrite("SELECT * FROM orders", &rule).unwrap();
    assert_eq!(out, "SELECT * FROM orders");
    assert!(changes.is_empty());
}

#[test]
fn test_multi_statement_isolation_with_semicolon_in_string() {
    let sql = "SELECT ';' FROM prod.a.t1;\nSELECT 1 FROM prod.b.t2;";
    let (out, changes) = rewrite(sql, &dev_catalog()).unwrap();
    assert!(out.contains("dev.a.t1"));
    assert!(out.contains("dev.b.t2"));
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].statement_index, 0);
    assert_eq!(changes[1].statement_index, 1);
}

#[test]
fn test_two_part_policy_is_configurable() {
    let mut rule = RewriteRule {
        new_catalog: Some("dev".to_string()),
        new_database: Some("stage".to_string()),
        ..RewriteRule::default()
    };
    let (out, _) = rewrite("SELECT 1 FROM sales.orders", &rule).unwrap();
    assert_eq!(out, "SELECT 1 FROM stage.orders");

    rule.two_part_policy = TwoPartPolicy::Catalog;
    let (out, _) = rewrite("SELECT 1 FROM sales.orders", &rule).unwrap();
    assert_eq!(out, "SELECT 1 FROM dev.orders");
}

// ── Composition ─────────────────────────────────────────────────────────

#[test]
fn test_case_canonicalization() {
    let out = format("select * from t", &FormatStyle::default()).unwrap();
    assert_eq!(out, "SELECT *\nFROM t");
}

#[test]
fn test_combined_pass_matches_sequential_passes() {
    let style = FormatStyle::default();
    let rule = dev_catalog();
    let sql = "select o.id, o.total from prod.sales.orders o;\nselect 1 from prod.sales.refunds";

    let (combined, combined_changes) = format_and_rewrite(sql, &style, &rule).unwrap();
    let (rewritten, sequential_changes) = rewrite(sql, &rule).unwrap();
    let sequential = format(&rewritten, &style).unwrap();

    assert_eq!(combined, sequential);
    assert_eq!(combined_changes.len(), sequential_changes.len());
}

#[test]
fn test_formatted_output_still_rewrites() {
    let style = FormatStyle::default();
    let formatted = format("select 1 from prod.sales.orders", &style).unwrap();
    let (out, changes) = rewrite(&formatted, &dev_catalog()).unwrap();
    assert!(out.contains("dev.sales.orders"));
    assert_eq!(changes.len(), 1);
}

#[test]
fn test_truncated_input_never_panics_any_pass() {
    let broken = "SELECT 'oops FROM prod.sales.orders";
    let style = FormatStyle::default();
    let formatted = format(broken, &style).unwrap();
    assert!(formatted.contains("'oops FROM prod.sales.orders"));
    let (out, changes) = rewrite(broken, &dev_catalog()).unwrap();
    assert_eq!(out, broken);
    assert!(changes.is_empty());
}

#[test]
fn test_change_records_serialize_for_reporting() {
    let (_, changes) = rewrite("SELECT 1 FROM prod.sales.orders", &dev_catalog()).unwrap();
    let json = ls_core::change::to_json(&changes).unwrap();
    assert!(json.contains("\"prod.sales.orders\""));
    assert!(json.contains("\"dev.sales.orders\""));
}
