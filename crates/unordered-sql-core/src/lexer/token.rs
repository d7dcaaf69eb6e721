//! Token types for the unordered SQL lexer.
//!
//! Tokens fall into four broad categories, decided by their first
//! character:
//! - names (alphabetic), either a [`Keyword`] or a plain identifier,
//! - numbers (ASCII digit),
//! - punctuation (entirely non-alphanumeric), see [`Punct`],
//! - special sequences: quoted strings, comments and the end-of-text
//!   sentinel, see [`Special`].

use serde::Serialize;

use super::Span;
use super::precedence;

/// SQL keywords.
///
/// Only SELECT, FROM, WHERE and the keyword operators carry meaning for the
/// parser; the rest are reserved so they are never mistaken for identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    // Query clauses
    Select,
    From,
    Where,
    Group,
    Order,
    By,

    // Insert / delete clauses
    Insert,
    Into,
    Values,
    Delete,

    // Other keywords
    Case,
    Using,
    As,
    Distinct,
    Null,
    Asc,
    Desc,
    Nulls,
    First,
    Last,
    Exists,

    // Joins
    Left,
    Right,
    Full,
    Inner,
    Outer,
    Straight,
    Cross,
    Natural,
    Join,
    On,

    // Set operations
    Union,
    Except,
    Intersect,

    // Operators
    Is,
    Not,
    And,
    All,
    Any,
    Between,
    In,
    Like,
    Or,
    Some,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "ORDER" => Some(Self::Order),
            "BY" => Some(Self::By),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "DELETE" => Some(Self::Delete),
            "CASE" => Some(Self::Case),
            "USING" => Some(Self::Using),
            "AS" => Some(Self::As),
            "DISTINCT" => Some(Self::Distinct),
            "NULL" => Some(Self::Null),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "NULLS" => Some(Self::Nulls),
            "FIRST" => Some(Self::First),
            "LAST" => Some(Self::Last),
            "EXISTS" => Some(Self::Exists),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "INNER" => Some(Self::Inner),
            "OUTER" => Some(Self::Outer),
            "STRAIGHT" => Some(Self::Straight),
            "CROSS" => Some(Self::Cross),
            "NATURAL" => Some(Self::Natural),
            "JOIN" => Some(Self::Join),
            "ON" => Some(Self::On),
            "UNION" => Some(Self::Union),
            "EXCEPT" => Some(Self::Except),
            "INTERSECT" => Some(Self::Intersect),
            "IS" => Some(Self::Is),
            "NOT" => Some(Self::Not),
            "AND" => Some(Self::And),
            "ALL" => Some(Self::All),
            "ANY" => Some(Self::Any),
            "BETWEEN" => Some(Self::Between),
            "IN" => Some(Self::In),
            "LIKE" => Some(Self::Like),
            "OR" => Some(Self::Or),
            "SOME" => Some(Self::Some),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::Order => "ORDER",
            Self::By => "BY",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Delete => "DELETE",
            Self::Case => "CASE",
            Self::Using => "USING",
            Self::As => "AS",
            Self::Distinct => "DISTINCT",
            Self::Null => "NULL",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Nulls => "NULLS",
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::Exists => "EXISTS",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Inner => "INNER",
            Self::Outer => "OUTER",
            Self::Straight => "STRAIGHT",
            Self::Cross => "CROSS",
            Self::Natural => "NATURAL",
            Self::Join => "JOIN",
            Self::On => "ON",
            Self::Union => "UNION",
            Self::Except => "EXCEPT",
            Self::Intersect => "INTERSECT",
            Self::Is => "IS",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::All => "ALL",
            Self::Any => "ANY",
            Self::Between => "BETWEEN",
            Self::In => "IN",
            Self::Like => "LIKE",
            Self::Or => "OR",
            Self::Some => "SOME",
        }
    }
}

/// Punctuation: structural symbols and operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Punct {
    // Operators, tightest binding first
    /// .
    Dot,
    /// ::
    DoubleColon,
    /// ~
    BitNot,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// +
    Plus,
    /// -
    Minus,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ^
    BitXor,
    /// =
    Eq,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    LtEq,
    /// >=
    GtEq,
    /// !=
    NotEq,

    // Structural symbols, never part of a longer run
    /// ;
    Semicolon,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// ,
    Comma,
    /// A line break. Significant because two in a row end a statement.
    Newline,

    /// A run of operator characters that maps to no known operator.
    UnknownOperator,
}

impl Punct {
    /// Maps a structural character to its punctuation kind.
    #[must_use]
    pub const fn structural(c: char) -> Option<Self> {
        match c {
            ';' => Some(Self::Semicolon),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            '[' => Some(Self::LeftBracket),
            ']' => Some(Self::RightBracket),
            ',' => Some(Self::Comma),
            '\n' => Some(Self::Newline),
            _ => None,
        }
    }

    /// Resolves a maximal run of operator characters.
    #[must_use]
    pub fn from_operator(s: &str) -> Self {
        match s {
            "." => Self::Dot,
            "::" => Self::DoubleColon,
            "~" => Self::BitNot,
            "<<" => Self::LeftShift,
            ">>" => Self::RightShift,
            "*" => Self::Star,
            "/" => Self::Slash,
            "%" => Self::Percent,
            "+" => Self::Plus,
            "-" => Self::Minus,
            "&" => Self::BitAnd,
            "|" => Self::BitOr,
            "^" => Self::BitXor,
            "=" => Self::Eq,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" => Self::LtEq,
            ">=" => Self::GtEq,
            "!=" => Self::NotEq,
            _ => Self::UnknownOperator,
        }
    }

    /// Returns true if `c` may appear in an operator run.
    #[must_use]
    pub const fn is_operator_char(c: char) -> bool {
        matches!(
            c,
            '!' | '@' | '#' | '^' | '&' | '*' | '-' | '+' | '=' | '|' | '<' | '>' | '/' | '%'
                | '.' | ':' | '~'
        )
    }

    /// Returns the canonical text, or `None` for [`Punct::UnknownOperator`].
    #[must_use]
    pub const fn as_str(&self) -> Option<&'static str> {
        let s = match self {
            Self::Dot => ".",
            Self::DoubleColon => "::",
            Self::BitNot => "~",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::NotEq => "!=",
            Self::Semicolon => ";",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Comma => ",",
            Self::Newline => "\n",
            Self::UnknownOperator => return None,
        };
        Some(s)
    }
}

/// Sequences that start with a non-alphanumeric character but may contain
/// anything, plus the end-of-text sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Special {
    /// 'string literal'
    SingleQuoteString,
    /// "quoted identifier"
    DoubleQuoteString,
    /// -- comment (excludes the trailing newline)
    LineComment,
    /// /* comment */
    BlockComment,
    /// End of input, always zero length.
    EndOfText,
}

/// The coarse category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenTag {
    Name,
    Number,
    Punctuation,
    Special,
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A name that matched a keyword.
    Keyword(Keyword),
    /// A name that is not a keyword.
    Identifier,
    /// Digits and dots, e.g. `42` or `3.4.2`. Not validated.
    Number,
    /// Structural symbol or operator.
    Punct(Punct),
    /// String, comment or end of text.
    Special {
        /// Which special sequence this is.
        kind: Special,
        /// False for a string or block comment that ran to the end of the
        /// text without its closing delimiter.
        terminated: bool,
    },
}

impl TokenKind {
    /// The end-of-text sentinel.
    pub const EOF: Self = Self::Special {
        kind: Special::EndOfText,
        terminated: true,
    };

    /// Returns the coarse category of this kind.
    #[must_use]
    pub const fn tag(&self) -> TokenTag {
        match self {
            Self::Keyword(_) | Self::Identifier => TokenTag::Name,
            Self::Number => TokenTag::Number,
            Self::Punct(_) => TokenTag::Punctuation,
            Self::Special { .. } => TokenTag::Special,
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates the zero-length end-of-text token at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self::new(TokenKind::EOF, Span::new(offset, offset))
    }

    /// Returns the coarse category of this token.
    #[must_use]
    pub const fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Special {
                kind: Special::EndOfText,
                ..
            }
        )
    }

    /// Returns true for line and block comments.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Special {
                kind: Special::LineComment | Special::BlockComment,
                ..
            }
        )
    }

    /// Returns true for a newline token.
    #[must_use]
    pub const fn is_newline(&self) -> bool {
        matches!(self.kind, TokenKind::Punct(Punct::Newline))
    }

    /// Returns false for a string or block comment missing its closing
    /// delimiter.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        match self.kind {
            TokenKind::Special { terminated, .. } => terminated,
            _ => true,
        }
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns the punctuation kind if this is a punctuation token.
    #[must_use]
    pub const fn as_punct(&self) -> Option<Punct> {
        match self.kind {
            TokenKind::Punct(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the binding strength of this token used as a binary
    /// operator, or `None` if it cannot be one.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        precedence::of(&self.kind)
    }

    /// Returns the source text of this token.
    #[must_use]
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        self.span.slice(src)
    }

    /// Returns the text from the token start up to `cursor`, or `None` if
    /// the cursor is outside the token.
    #[must_use]
    pub fn text_before<'a>(&self, src: &'a str, cursor: usize) -> Option<&'a str> {
        self.span.text_before(src, cursor)
    }

    /// Returns the name this token refers to.
    ///
    /// Plain identifiers are returned as written; double-quoted identifiers
    /// lose their quotes. Any other token has no name.
    #[must_use]
    pub fn name<'a>(&self, src: &'a str) -> Option<&'a str> {
        match self.kind {
            TokenKind::Identifier => Some(self.text(src)),
            TokenKind::Special {
                kind: Special::DoubleQuoteString,
                terminated,
            } => {
                let text = self.text(src);
                let inner = text.strip_prefix('"').unwrap_or(text);
                if terminated {
                    Some(inner.strip_suffix('"').unwrap_or(inner))
                } else {
                    Some(inner)
                }
            }
            _ => None,
        }
    }
}
