//! Abstract Syntax Tree (AST) types for unordered SQL statements.

mod expression;
mod statement;

pub use expression::{Expr, ExprDisplay, PLACEHOLDER_TEXT};
pub use statement::{
    FromClause, FromField, SelectClause, SelectField, Statement, UnknownSequence, WhereClause,
};
