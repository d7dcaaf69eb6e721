//! Binding strength of binary operators.
//!
//! Lower numbers bind tighter. The parser climbs with a ceiling: an
//! operator is absorbed only while its precedence does not exceed the
//! ceiling, so passing `COMMA_PRECEDENCE` admits everything and
//! `COMMA_PRECEDENCE - 1` admits everything except the comma.

use super::{Keyword, Punct, TokenKind};

/// Precedence of `.`, the tightest operator.
pub const DOT_PRECEDENCE: u8 = 1;

/// Precedence of `,`. Must stay the maximum of the table.
pub const COMMA_PRECEDENCE: u8 = 100;

/// Returns the binary-operator precedence of a token kind.
///
/// Returns `None` if the kind cannot act as a binary operator.
#[must_use]
pub const fn of(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Punct(p) => punct(*p),
        TokenKind::Keyword(kw) => keyword(*kw),
        _ => None,
    }
}

/// Returns the precedence of a punctuation operator.
#[must_use]
pub const fn punct(p: Punct) -> Option<u8> {
    match p {
        Punct::Dot => Some(DOT_PRECEDENCE),
        Punct::DoubleColon => Some(2),
        Punct::LeftShift | Punct::RightShift => Some(4),
        Punct::Star | Punct::Slash | Punct::Percent => Some(5),
        Punct::Plus | Punct::Minus | Punct::BitAnd | Punct::BitOr | Punct::BitXor => Some(6),
        Punct::Eq | Punct::Lt | Punct::Gt | Punct::LtEq | Punct::GtEq | Punct::NotEq => Some(7),
        Punct::Comma => Some(COMMA_PRECEDENCE),
        // ~ is prefix-only and the grammar has no prefix operators
        _ => None,
    }
}

/// Returns the precedence of a keyword operator.
#[must_use]
pub const fn keyword(kw: Keyword) -> Option<u8> {
    match kw {
        Keyword::Is | Keyword::In | Keyword::Like => Some(7),
        Keyword::And => Some(9),
        Keyword::Or => Some(10),
        _ => None,
    }
}
