//! Expression AST types.

use std::fmt;

use serde::Serialize;

use crate::lexer::{Span, Token};

/// Text of the synthetic leaf inserted when recovery finds no real one.
pub const PLACEHOLDER_TEXT: &str = "1";

/// An expression, e.g. `t.a::int < 4 or t.b = 'hi'`.
///
/// Leaves and operators reference tokens, so the source text is needed to
/// see what they say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    /// An identifier, quoted identifier, number or string literal.
    Value(Token),

    /// A parenthesized expression.
    Paren {
        /// The `(` token.
        left: Token,
        /// The enclosed expression.
        inner: Box<Expr>,
        /// The `)` token, or `None` if the group was never closed.
        right: Option<Token>,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator token, punctuation or a keyword such as `and`.
        op: Token,
        /// Right operand.
        right: Box<Expr>,
    },

    /// Stand-in for a leaf that could not be parsed, e.g. after the `.` in
    /// `table1. + 5` while the user is still typing.
    Placeholder(&'static str),
}

impl Expr {
    /// Creates a binary expression.
    #[must_use]
    pub fn binary(left: Self, op: Token, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a placeholder leaf.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::Placeholder(PLACEHOLDER_TEXT)
    }

    /// Returns true for a placeholder leaf.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Returns true if a placeholder appears anywhere in the tree.
    #[must_use]
    pub fn has_placeholder(&self) -> bool {
        match self {
            Self::Value(_) => false,
            Self::Paren { inner, .. } => inner.has_placeholder(),
            Self::Binary { left, right, .. } => left.has_placeholder() || right.has_placeholder(),
            Self::Placeholder(_) => true,
        }
    }

    /// Returns the source span covered by the expression.
    ///
    /// Placeholders occupy no source text, so a bare placeholder has no
    /// span and a binary expression with a placeholder operand covers only
    /// its real parts.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Value(token) => Some(token.span),
            Self::Paren { left, inner, right } => {
                let mut span = left.span;
                if let Some(inner) = inner.span() {
                    span = span.merge(inner);
                }
                if let Some(right) = right {
                    span = span.merge(right.span);
                }
                Some(span)
            }
            Self::Binary { left, op, right } => {
                let mut span = op.span;
                for side in [left, right] {
                    if let Some(s) = side.span() {
                        span = span.merge(s);
                    }
                }
                Some(span)
            }
            Self::Placeholder(_) => None,
        }
    }

    /// Returns a fully parenthesized rendering of the tree for diagnostics
    /// and tests, e.g. `(a + (b * c))`.
    ///
    /// Groups written in the source render as `[...]` so they stay distinct
    /// from the added parentheses; an unclosed group has no `]`.
    #[must_use]
    pub const fn display<'a>(&'a self, src: &'a str) -> ExprDisplay<'a> {
        ExprDisplay { expr: self, src }
    }
}

/// Renders an [`Expr`] against its source text. See [`Expr::display`].
pub struct ExprDisplay<'a> {
    expr: &'a Expr,
    src: &'a str,
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expr {
            Expr::Value(token) => f.write_str(token.text(self.src)),
            Expr::Paren { inner, right, .. } => {
                write!(f, "[{}", inner.display(self.src))?;
                if right.is_some() {
                    f.write_str("]")?;
                }
                Ok(())
            }
            Expr::Binary { left, op, right } => write!(
                f,
                "({} {} {})",
                left.display(self.src),
                op.text(self.src),
                right.display(self.src)
            ),
            Expr::Placeholder(text) => write!(f, "<{text}>"),
        }
    }
}
