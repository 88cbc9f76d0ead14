//! Reserved-word and clause keyword tables

/// Reserved words, sorted for binary search. Classification is
/// case-insensitive; anything not in this table lexes as an identifier,
/// so function names like `count` or `coalesce` stay identifiers and are
/// never re-cased or treated as clause boundaries.
const RESERVED: &[&str] = &[
    "ALL",
    "ALTER",
    "AND",
    "ANTI",
    "AS",
    "ASC",
    "BETWEEN",
    "BY",
    "CASE",
    "CAST",
    "CREATE",
    "CROSS",
    "CURRENT",
    "DELETE",
    "DESC",
    "DISTINCT",
    "DROP",
    "ELSE",
    "END",
    "ESCAPE",
    "EXCEPT",
    "EXISTS",
    "FALSE",
    "FETCH",
    "FILTER",
    "FIRST",
    "FOR",
    "FROM",
    "FULL",
    "GROUP",
    "HAVING",
    "ILIKE",
    "IN",
    "INNER",
    "INSERT",
    "INTERSECT",
    "INTERVAL",
    "INTO",
    "IS",
    "JOIN",
    "LAST",
    "LATERAL",
    "LEFT",
    "LIKE",
    "LIMIT",
    "MERGE",
    "NATURAL",
    "NOT",
    "NULL",
    "NULLS",
    "OFFSET",
    "ON",
    "OR",
    "ORDER",
    "OUTER",
    "OVER",
    "PARTITION",
    "QUALIFY",
    "RECURSIVE",
    "RIGHT",
    "ROWS",
    "SELECT",
    "SEMI",
    "SET",
    "TABLE",
    "THEN",
    "TRUE",
    "UNION",
    "UPDATE",
    "USING",
    "VALUES",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
];

/// Clause keywords that start a new line at paren depth zero.
const CLAUSE_STARTS: &[&str] = &[
    "EXCEPT", "FROM", "GROUP", "HAVING", "INTERSECT", "LIMIT", "ORDER", "SELECT", "UNION", "WHERE",
];

/// Words that can form a join phrase (`LEFT OUTER JOIN`). A newline goes
/// before the first word of the phrase only.
const JOIN_FAMILY: &[&str] = &[
    "ANTI", "CROSS", "FULL", "INNER", "JOIN", "LEFT", "NATURAL", "OUTER", "RIGHT", "SEMI",
];

/// Keywords that put the qualifier rewriter into its name-expecting state.
const NAME_TRIGGERS: &[&str] = &["FROM", "INTO", "JOIN", "UPDATE"];

fn contains_ignore_case(table: &[&str], word: &str) -> bool {
    table
        .binary_search_by(|probe| {
            probe
                .bytes()
                .map(|b| b.to_ascii_uppercase())
                .cmp(word.bytes().map(|b| b.to_ascii_uppercase()))
        })
        .is_ok()
}

/// Is this word a reserved SQL keyword?
pub fn is_reserved(word: &str) -> bool {
    contains_ignore_case(RESERVED, word)
}

/// Does this keyword begin a top-level clause line?
pub fn is_clause_start(word: &str) -> bool {
    contains_ignore_case(CLAUSE_STARTS, word)
}

/// Is this keyword part of a join phrase?
pub fn is_join_word(word: &str) -> bool {
    contains_ignore_case(JOIN_FAMILY, word)
}

/// Does this keyword introduce a table reference for the rewriter?
pub fn is_name_trigger(word: &str) -> bool {
    contains_ignore_case(NAME_TRIGGERS, word)
}
