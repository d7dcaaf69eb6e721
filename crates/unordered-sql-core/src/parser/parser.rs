//! Unordered SQL parser implementation.

use tracing::{debug, trace, warn};

use super::config::ParserConfig;
use crate::ast::{
    Expr, FromClause, FromField, SelectClause, SelectField, Statement, UnknownSequence,
    WhereClause,
};
use crate::lexer::{
    COMMA_PRECEDENCE, DOT_PRECEDENCE, Keyword, Punct, Special, Token, TokenKind, Tokenizer,
};

/// Outcome of parsing an expression or leaf.
///
/// `Recovered` carries a tree that had to be completed with a placeholder;
/// callers stop extending it. Never escapes this module.
#[derive(Debug)]
enum Parsed<T> {
    Complete(T),
    Recovered(T),
}

impl<T> Parsed<T> {
    const fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered(_))
    }

    fn into_inner(self) -> T {
        match self {
            Self::Complete(value) | Self::Recovered(value) => value,
        }
    }
}

/// Unordered SQL parser.
///
/// Parsing is total: every input yields statements, with anything the
/// grammar does not cover recorded as unknown token runs, placeholder
/// leaves or unclosed groups.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    config: ParserConfig,
    /// Current expression nesting.
    depth: usize,
    /// Comments seen while building the current statement.
    comments: Vec<Token>,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, 0, ParserConfig::default())
    }

    /// Creates a parser that starts at byte `offset`.
    #[must_use]
    pub fn with_offset(input: &'a str, offset: usize) -> Self {
        Self::with_config(input, offset, ParserConfig::default())
    }

    /// Creates a parser with an explicit configuration.
    ///
    /// An out-of-range `max_depth` is clamped into `1..=MAX_DEPTH_LIMIT`.
    #[must_use]
    pub fn with_config(input: &'a str, offset: usize, config: ParserConfig) -> Self {
        let clamped = config.clamped();
        if clamped != config {
            warn!(
                requested = config.max_depth,
                max_depth = clamped.max_depth,
                "clamping parser max_depth"
            );
        }
        Self {
            tokenizer: Tokenizer::with_offset(input, offset),
            config: clamped,
            depth: 0,
            comments: Vec::new(),
        }
    }

    /// Parses every remaining statement.
    pub fn parse_all(&mut self) -> Vec<Statement> {
        let mut statements = Vec::new();
        while !self.skip_separators().is_eof() {
            statements.push(self.parse_statement());
        }
        statements
    }

    /// Parses exactly one statement.
    ///
    /// Leading separators are skipped. At end of input the result is an
    /// empty statement with a zero-length span at the end.
    pub fn parse_one(&mut self) -> Statement {
        self.skip_separators();
        self.parse_statement()
    }

    /// Consumes newlines and semicolons before a statement; returns the
    /// first other token without consuming it.
    fn skip_separators(&mut self) -> Token {
        loop {
            let token = self.tokenizer.peek(1);
            match token.as_punct() {
                Some(Punct::Newline | Punct::Semicolon) => {
                    self.tokenizer.consume();
                }
                _ => return token,
            }
        }
    }

    /// Peeks the next significant token.
    ///
    /// Comments are consumed and recorded; a single newline is swallowed.
    /// A newline is only returned when a second one follows it, i.e. at a
    /// statement boundary.
    fn next_standard_token(&mut self) -> Token {
        loop {
            let token = self.tokenizer.peek(1);
            if token.is_newline() {
                if self.tokenizer.peek(2).is_newline() {
                    return token;
                }
                self.tokenizer.consume();
            } else if token.is_comment() {
                self.tokenizer.consume();
                self.comments.push(token);
            } else {
                return token;
            }
        }
    }

    /// Parses a statement; the tokenizer is at its first token.
    fn parse_statement(&mut self) -> Statement {
        let start = self.tokenizer.peek(1).span.start;
        let mut statement = Statement::new(start);
        let mut prev_known = true;

        loop {
            let token = self.next_standard_token();
            match token.kind {
                TokenKind::Keyword(Keyword::Select) => {
                    let clause = self.parse_select();
                    statement.selects.push(clause);
                }
                TokenKind::Keyword(Keyword::From) => {
                    let clause = self.parse_from();
                    statement.froms.push(clause);
                }
                TokenKind::Keyword(Keyword::Where) => {
                    let clause = self.parse_where();
                    statement.wheres.push(clause);
                }
                TokenKind::Punct(Punct::Semicolon) => {
                    self.finish(&mut statement);
                    self.tokenizer.consume();
                    break;
                }
                TokenKind::Punct(Punct::Newline) => {
                    // next_standard_token only stops at a double newline
                    self.finish(&mut statement);
                    self.tokenizer.consume();
                    self.tokenizer.consume();
                    break;
                }
                TokenKind::Special {
                    kind: Special::EndOfText,
                    ..
                } => {
                    self.finish(&mut statement);
                    break;
                }
                _ => {
                    self.tokenizer.consume();
                    Self::record_unknown(&mut statement, token, prev_known);
                    prev_known = false;
                    continue;
                }
            }
            prev_known = true;
        }

        trace!(
            start = statement.span.start,
            end = statement.span.end,
            selects = statement.selects.len(),
            froms = statement.froms.len(),
            wheres = statement.wheres.len(),
            unknowns = statement.unknowns.len(),
            "parsed statement"
        );
        statement
    }

    /// Closes the statement span at the last consumed token and hands over
    /// the collected comments.
    fn finish(&mut self, statement: &mut Statement) {
        let start = statement.span.start;
        let end = self.tokenizer.last_consumed_end().unwrap_or(start).max(start);
        statement.span.end = end;
        statement.comments = std::mem::take(&mut self.comments);
    }

    /// Adds an unexpected token to the statement, extending the current
    /// unknown run when the previous token was unknown too.
    fn record_unknown(statement: &mut Statement, token: Token, prev_known: bool) {
        debug!(
            start = token.span.start,
            end = token.span.end,
            "unexpected token"
        );
        match statement.unknowns.last_mut() {
            Some(run) if !prev_known => run.span = run.span.merge(token.span),
            _ => statement.unknowns.push(UnknownSequence {
                span: token.span,
                first_token: token,
            }),
        }
    }

    /// Parses `select expr [as] [alias], ...`.
    fn parse_select(&mut self) -> SelectClause {
        let keyword = self.tokenizer.consume();
        let mut fields = vec![];

        loop {
            let expr = self.parse_expression(COMMA_PRECEDENCE - 1).into_inner();
            let alias = self.parse_optional_alias();
            fields.push(SelectField { expr, alias });

            if !self.eat_comma() {
                break;
            }
        }

        SelectClause { keyword, fields }
    }

    /// Parses `from table [as] [alias], ...`, where a table is a dot chain.
    fn parse_from(&mut self) -> FromClause {
        let keyword = self.tokenizer.consume();
        let mut fields = vec![];

        loop {
            let table = self.parse_expression(DOT_PRECEDENCE).into_inner();
            let alias = self.parse_optional_alias();
            fields.push(FromField { table, alias });

            if !self.eat_comma() {
                break;
            }
        }

        FromClause { keyword, fields }
    }

    /// Parses `where expr`.
    fn parse_where(&mut self) -> WhereClause {
        let keyword = self.tokenizer.consume();
        let expr = self.parse_expression(COMMA_PRECEDENCE - 1).into_inner();
        WhereClause { keyword, expr }
    }

    /// Parses an optional `[as] alias`.
    ///
    /// A dangling `as` with no alias after it is accepted and dropped.
    fn parse_optional_alias(&mut self) -> Option<Token> {
        let mut token = self.next_standard_token();
        if token.as_keyword() == Some(Keyword::As) {
            self.tokenizer.consume();
            token = self.next_standard_token();
        }
        match token.kind {
            TokenKind::Identifier
            | TokenKind::Special {
                kind: Special::DoubleQuoteString,
                ..
            } => {
                self.tokenizer.consume();
                Some(token)
            }
            _ => None,
        }
    }

    /// Consumes a comma if one is next.
    fn eat_comma(&mut self) -> bool {
        if self.next_standard_token().as_punct() == Some(Punct::Comma) {
            self.tokenizer.consume();
            true
        } else {
            false
        }
    }

    /// Parses an expression whose operators all have precedence at most
    /// `ceiling`, guarding the nesting depth.
    fn parse_expression(&mut self, ceiling: u8) -> Parsed<Expr> {
        if self.depth >= self.config.max_depth {
            warn!(
                depth = self.depth,
                offset = self.tokenizer.peek(1).span.start,
                "expression nesting limit reached"
            );
            return Parsed::Recovered(Expr::placeholder());
        }
        self.depth += 1;
        let parsed = self.climb(ceiling);
        self.depth -= 1;
        parsed
    }

    /// Precedence climbing. Each right-hand side only absorbs strictly
    /// tighter operators, so equal precedence associates to the left.
    fn climb(&mut self, ceiling: u8) -> Parsed<Expr> {
        let mut lhs = match self.parse_leaf() {
            Parsed::Complete(expr) => expr,
            recovered @ Parsed::Recovered(_) => return recovered,
        };

        loop {
            let op = self.next_standard_token();
            let Some(precedence) = op.precedence() else {
                break;
            };
            if precedence > ceiling {
                break;
            }
            self.tokenizer.consume();

            let rhs = self.parse_expression(precedence.saturating_sub(1));
            let recovered = rhs.is_recovered();
            lhs = Expr::binary(lhs, op, rhs.into_inner());
            if recovered {
                return Parsed::Recovered(lhs);
            }
        }

        Parsed::Complete(lhs)
    }

    /// Parses a non-binary expression: a value or a parenthesized group.
    fn parse_leaf(&mut self) -> Parsed<Expr> {
        let token = self.next_standard_token();

        match token.kind {
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::Special {
                kind: Special::SingleQuoteString | Special::DoubleQuoteString,
                ..
            } => {
                self.tokenizer.consume();
                Parsed::Complete(Expr::Value(token))
            }
            TokenKind::Punct(Punct::LeftParen) => {
                self.tokenizer.consume();
                // commas are allowed inside parentheses, e.g. `in (1, 2)`
                let inner = self.parse_expression(COMMA_PRECEDENCE).into_inner();
                let close = self.next_standard_token();
                let right = if close.as_punct() == Some(Punct::RightParen) {
                    self.tokenizer.consume();
                    Some(close)
                } else {
                    debug!(start = token.span.start, "unclosed parenthesis");
                    None
                };
                Parsed::Complete(Expr::Paren {
                    left: token,
                    inner: Box::new(inner),
                    right,
                })
            }
            _ => {
                debug!(
                    start = token.span.start,
                    end = token.span.end,
                    "no expression leaf, inserting placeholder"
                );
                Parsed::Recovered(Expr::placeholder())
            }
        }
    }
}
