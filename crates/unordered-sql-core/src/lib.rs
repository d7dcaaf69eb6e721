//! # unordered-sql-core
//!
//! Lexer, parser and AST for "unordered SQL": a SQL-like dialect in which
//! SELECT, FROM and WHERE clauses may repeat and appear in any order.
//!
//! This crate provides:
//! - A pull tokenizer with bounded lookahead
//! - A recursive descent parser with precedence climbing for expressions
//! - Error recovery that never fails: anything unparseable is recorded in
//!   the tree instead
//!
//! The tree references the source through byte [`Span`]s, so nothing is
//! copied while parsing; keep the text around to read names and literals.
//!
//! ## Parsing
//!
//! ```rust
//! use unordered_sql_core::parse_all;
//!
//! let sql = "from users u select u.name where u.age > 18";
//! let statements = parse_all(sql);
//!
//! assert_eq!(statements.len(), 1);
//! let select = &statements[0].selects[0];
//! assert_eq!(select.fields[0].expr.display(sql).to_string(), "(u . name)");
//! ```
//!
//! ## Recovery
//!
//! Statements are separated by `;` or a blank line. Tokens that fit no
//! clause are kept as unknown runs:
//!
//! ```rust
//! use unordered_sql_core::parse_all;
//!
//! let sql = "select 1 @@@ 2\n\nselect b";
//! let statements = parse_all(sql);
//!
//! assert_eq!(statements.len(), 2);
//! assert_eq!(statements[0].unknowns[0].span.slice(sql), "@@@ 2");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Expr, Statement};
pub use lexer::{Span, Token, TokenKind, Tokenizer};
pub use parser::{ConfigError, Parser, ParserConfig};

/// Returns a tokenizer over `text` starting at byte `offset`.
#[must_use]
pub fn tokenize(text: &str, offset: usize) -> Tokenizer<'_> {
    Tokenizer::with_offset(text, offset)
}

/// Parses every statement in `text`.
#[must_use]
pub fn parse_all(text: &str) -> Vec<Statement> {
    Parser::new(text).parse_all()
}

/// Parses the single statement that begins at byte `offset`.
#[must_use]
pub fn parse_one(text: &str, offset: usize) -> Statement {
    Parser::with_offset(text, offset).parse_one()
}
