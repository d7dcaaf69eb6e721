//! Property tests for the tokenizer and for parse totality.

mod common;
use common::*;

use proptest::prelude::*;
use unordered_sql_core::lexer::Keyword;
use unordered_sql_core::{Tokenizer, parse_all};

/// Text biased towards characters the grammar cares about.
fn arb_sqlish() -> BoxedStrategy<String> {
    prop::string::string_regex("[a-zA-Z0-9_ \t\n;(),.'\"*+<>=:!@#%/\\\\-]{0,64}")
        .expect("valid regex")
        .boxed()
}

fn arb_text() -> BoxedStrategy<String> {
    prop_oneof![3 => arb_sqlish(), 1 => any::<String>()].boxed()
}

fn arb_ident() -> BoxedStrategy<String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,5}")
        .expect("valid regex")
        .prop_filter("must not be keyword", |s| Keyword::from_str(s).is_none())
        .boxed()
}

fn arb_leaf() -> BoxedStrategy<String> {
    prop_oneof![
        arb_ident(),
        (0u32..10_000).prop_map(|n| n.to_string()),
        arb_ident().prop_map(|s| format!("'{s}'")),
        (arb_ident(), arb_ident()).prop_map(|(t, c)| format!("{t}.{c}")),
    ]
    .boxed()
}

fn arb_expr(depth: u32) -> BoxedStrategy<String> {
    if depth == 0 {
        return arb_leaf();
    }
    let op = prop::sample::select(vec![
        "+", "-", "*", "/", "%", "<<", ">>", "&", "|", "^", "=", "<", ">", "<=", ">=", "!=",
        "and", "or", "like", "is", "::",
    ]);
    prop_oneof![
        2 => arb_leaf(),
        2 => (arb_expr(depth - 1), op, arb_expr(depth - 1))
            .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
        1 => arb_expr(depth - 1).prop_map(|e| format!("({e})")),
        1 => (arb_expr(0), proptest::collection::vec(arb_leaf(), 1..4))
            .prop_map(|(e, items)| format!("{e} in ({})", items.join(", "))),
    ]
    .boxed()
}

/// A well-formed statement made of clauses in random order.
fn arb_statement() -> BoxedStrategy<(String, usize, usize, usize)> {
    let select = proptest::collection::vec(arb_expr(2), 1..4)
        .prop_map(|cols| format!("select {}", cols.join(", ")));
    let from = proptest::collection::vec(arb_ident(), 1..3)
        .prop_map(|tables| format!("from {}", tables.join(", ")));
    let filter = arb_expr(2).prop_map(|e| format!("where {e}"));
    let clause = prop_oneof![select, from, filter];
    let sep = prop::sample::select(vec![" ", "\n", " -- note\n", " /* note */ "]);

    proptest::collection::vec((clause, sep), 1..5)
        .prop_map(|clauses| {
            let mut sql = String::new();
            let (mut selects, mut froms, mut wheres) = (0, 0, 0);
            for (clause, sep) in clauses {
                if clause.starts_with("select") {
                    selects += 1;
                } else if clause.starts_with("from") {
                    froms += 1;
                } else {
                    wheres += 1;
                }
                sql.push_str(&clause);
                sql.push_str(sep);
            }
            (sql, selects, froms, wheres)
        })
        .boxed()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn tokens_cover_input(text in arb_text()) {
        let tokens = Tokenizer::tokenize(&text);
        let eof = tokens.last().expect("tokenize always ends with end of text");
        prop_assert!(eof.is_eof());
        prop_assert_eq!(eof.span.start, text.len());
        prop_assert!(eof.span.is_empty());

        let mut prev_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= prev_end);
            prop_assert!(token.span.end <= text.len());
            if !token.is_eof() {
                prop_assert!(!token.span.is_empty());
            }
            let gap = &text[prev_end..token.span.start];
            prop_assert!(
                gap.chars().all(|c| c.is_whitespace() && c != '\n'),
                "gap {:?} before {:?} in {:?}", gap, token, text
            );
            prev_end = token.span.end;
        }
    }

    #[test]
    fn each_token_relexes_to_itself(text in arb_text()) {
        for token in Tokenizer::tokenize(&text) {
            if token.is_eof() {
                continue;
            }
            let alone = Tokenizer::tokenize(token.text(&text));
            prop_assert_eq!(alone.len(), 2, "{:?} in {:?}", token, text);
            prop_assert_eq!(alone[0].kind, token.kind);
            prop_assert_eq!(alone[0].tag(), token.tag());
            prop_assert_eq!(alone[0].span.len(), token.span.len());
        }
    }

    #[test]
    fn tokenizing_resumes_at_any_token(text in arb_sqlish()) {
        let tokens = Tokenizer::tokenize(&text);
        let body = &tokens[..tokens.len() - 1];
        for (i, token) in body.iter().enumerate() {
            let resumed: Vec<_> = Tokenizer::with_offset(&text, token.span.start).collect();
            prop_assert_eq!(&resumed[..], &body[i..]);
        }
    }

    #[test]
    fn peek_matches_consume(text in arb_sqlish(), k in 1usize..5) {
        let mut tokenizer = Tokenizer::new(&text);
        let peeked = tokenizer.peek(k);
        for _ in 1..k {
            tokenizer.consume();
        }
        prop_assert_eq!(tokenizer.consume(), peeked);
    }

    #[test]
    fn parsing_is_total(text in arb_text()) {
        let statements = parse_all(&text);
        assert_well_formed(&text, &statements);
    }

    #[test]
    fn well_formed_statements_parse_cleanly(
        (sql, selects, froms, wheres) in arb_statement()
    ) {
        let statements = parse_all(&sql);
        prop_assert_eq!(statements.len(), 1, "{:?}", sql);
        let statement = &statements[0];
        prop_assert!(statement.unknowns.is_empty(), "{:?} -> {:?}", sql, statement.unknowns);
        prop_assert_eq!(statement.selects.len(), selects);
        prop_assert_eq!(statement.froms.len(), froms);
        prop_assert_eq!(statement.wheres.len(), wheres);
        for clause in &statement.selects {
            for field in &clause.fields {
                prop_assert!(!field.expr.has_placeholder(), "{:?}", sql);
            }
        }
        for clause in &statement.wheres {
            prop_assert!(!clause.expr.has_placeholder(), "{:?}", sql);
        }
    }
}
