//! Statement and clause AST types.

use serde::Serialize;

use super::expression::Expr;
use crate::lexer::{Span, Token};

/// One field of a SELECT clause, e.g. `t.a as x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectField {
    /// The selected expression.
    pub expr: Expr,
    /// The alias, an identifier or double-quoted identifier.
    pub alias: Option<Token>,
}

/// A `select a, b, c` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectClause {
    /// The SELECT keyword.
    pub keyword: Token,
    /// Comma-separated fields in source order.
    pub fields: Vec<SelectField>,
}

/// One table of a FROM clause, e.g. `schema.t1 t`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FromField {
    /// The table name; only dot-separated chains are parsed here.
    pub table: Expr,
    /// The alias, an identifier or double-quoted identifier.
    pub alias: Option<Token>,
}

/// A `from t1, t2` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FromClause {
    /// The FROM keyword.
    pub keyword: Token,
    /// Comma-separated tables in source order.
    pub fields: Vec<FromField>,
}

/// A `where a < 4` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhereClause {
    /// The WHERE keyword.
    pub keyword: Token,
    /// The condition.
    pub expr: Expr,
}

/// A maximal run of tokens the parser could not attribute to any clause.
///
/// Comments inside the run do not break it, so the span may cover them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownSequence {
    /// Covers the first through the last token of the run.
    pub span: Span,
    /// The token that started the run.
    pub first_token: Token,
}

/// A statement: any number of SELECT, FROM and WHERE clauses, in any
/// order.
///
/// Clause lists keep the order clauses were written in, but the order
/// carries no meaning across lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// From the first token to the last one before the terminator.
    pub span: Span,
    pub selects: Vec<SelectClause>,
    pub froms: Vec<FromClause>,
    pub wheres: Vec<WhereClause>,
    /// Comment tokens met anywhere in the statement.
    pub comments: Vec<Token>,
    pub unknowns: Vec<UnknownSequence>,
}

impl Statement {
    /// Creates an empty statement starting at `start`.
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Self {
            span: Span::new(start, start),
            selects: Vec::new(),
            froms: Vec::new(),
            wheres: Vec::new(),
            comments: Vec::new(),
            unknowns: Vec::new(),
        }
    }

    /// Returns true if a cursor at `offset` falls within the statement.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        self.span.contains(offset)
    }

    /// Returns true if the statement has no clauses and nothing unknown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selects.is_empty()
            && self.froms.is_empty()
            && self.wheres.is_empty()
            && self.unknowns.is_empty()
    }

    /// Returns the source text of the statement.
    #[must_use]
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        self.span.slice(src)
    }
}
