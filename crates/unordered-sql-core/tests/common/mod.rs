#![allow(dead_code)]

use unordered_sql_core::ast::{FromClause, SelectClause, Statement};
use unordered_sql_core::parse_all;

/// Parses `sql` and expects exactly one statement.
pub fn parse_single(sql: &str) -> Statement {
    let mut statements = parse_all(sql);
    assert_eq!(
        statements.len(),
        1,
        "Expected one statement for: {sql:?}\nGot: {statements:#?}"
    );
    statements.remove(0)
}

/// Renders every field of a SELECT clause.
pub fn select_fields(sql: &str, clause: &SelectClause) -> Vec<String> {
    clause
        .fields
        .iter()
        .map(|f| f.expr.display(sql).to_string())
        .collect()
}

/// Renders every table of a FROM clause.
pub fn from_tables(sql: &str, clause: &FromClause) -> Vec<String> {
    clause
        .fields
        .iter()
        .map(|f| f.table.display(sql).to_string())
        .collect()
}

/// Renders the first SELECT field of a single-statement input.
pub fn first_select_expr(sql: &str) -> String {
    let statement = parse_single(sql);
    let clause = statement
        .selects
        .first()
        .unwrap_or_else(|| panic!("No SELECT clause in: {sql:?}"));
    clause.fields[0].expr.display(sql).to_string()
}

/// Renders the WHERE condition of a single-statement input.
pub fn where_expr(sql: &str) -> String {
    let statement = parse_single(sql);
    let clause = statement
        .wheres
        .first()
        .unwrap_or_else(|| panic!("No WHERE clause in: {sql:?}"));
    clause.expr.display(sql).to_string()
}

/// Returns the source text of each unknown run.
pub fn unknown_texts<'a>(sql: &'a str, statement: &Statement) -> Vec<&'a str> {
    statement
        .unknowns
        .iter()
        .map(|u| u.span.slice(sql))
        .collect()
}

/// Checks the structural invariants every parse result must satisfy.
pub fn assert_well_formed(sql: &str, statements: &[Statement]) {
    let mut prev_end = 0;
    for statement in statements {
        let span = statement.span;
        assert!(span.start <= span.end, "inverted span {span:?} in {sql:?}");
        assert!(span.end <= sql.len(), "span {span:?} out of bounds in {sql:?}");
        assert!(
            span.start >= prev_end,
            "statement spans overlap or are out of order in {sql:?}"
        );
        prev_end = span.end;
        for unknown in &statement.unknowns {
            assert!(unknown.span.start >= span.start && unknown.span.end <= span.end);
            assert_eq!(unknown.span.start, unknown.first_token.span.start);
        }
        for comment in &statement.comments {
            assert!(comment.is_comment());
            assert!(comment.span.end <= sql.len());
        }
    }
}
