//! Unordered SQL lexer.
//!
//! This module provides a hand-written pull tokenizer that produces tokens on
//! demand, with a small lookahead buffer for the parser.

pub mod precedence;
mod span;
mod token;
mod tokenizer;

pub use precedence::{COMMA_PRECEDENCE, DOT_PRECEDENCE};
pub use span::Span;
pub use token::{Keyword, Punct, Special, Token, TokenKind, TokenTag};
pub use tokenizer::Tokenizer;
