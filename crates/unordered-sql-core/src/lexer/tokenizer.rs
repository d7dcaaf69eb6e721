//! Pull tokenizer with bounded lookahead.

use std::collections::VecDeque;

use super::{Keyword, Punct, Span, Special, Token, TokenKind};

/// Scans a single token starting at a byte position.
struct Scanner<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Scanner<'a> {
    const fn new(input: &'a str, pos: usize) -> Self {
        Self {
            input,
            pos,
            start: pos,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace, except newlines which are tokens.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace() && c != '\n') {
            self.advance();
        }
    }

    /// Creates a token spanning from start to the current position.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    const fn make_special(&self, kind: Special, terminated: bool) -> Token {
        self.make_token(TokenKind::Special { kind, terminated })
    }

    /// Scans the next token.
    fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::EOF);
        };

        match c {
            c if c.is_alphabetic() => self.scan_name(),
            c if c.is_ascii_digit() => self.scan_number(),
            '\'' => self.scan_string('\'', Special::SingleQuoteString),
            '"' => self.scan_string('"', Special::DoubleQuoteString),
            '-' if self.peek() == Some('-') => self.scan_line_comment(),
            '/' if self.peek() == Some('*') => self.scan_block_comment(),
            c => {
                if let Some(p) = Punct::structural(c) {
                    self.make_token(TokenKind::Punct(p))
                } else if Punct::is_operator_char(c) {
                    self.scan_operator()
                } else {
                    self.make_token(TokenKind::Punct(Punct::UnknownOperator))
                }
            }
        }
    }

    /// Scans an identifier or keyword.
    fn scan_name(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans digits and dots. `3.4.2` is one number token.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        self.make_token(TokenKind::Number)
    }

    /// Scans a quoted string; the opening quote is already consumed.
    fn scan_string(&mut self, quote: char, kind: Special) -> Token {
        loop {
            match self.advance() {
                Some('\\') if self.peek() == Some(quote) => {
                    self.advance();
                }
                Some(c) if c == quote => return self.make_special(kind, true),
                Some(_) => {}
                None => return self.make_special(kind, false),
            }
        }
    }

    /// Scans a `--` comment up to, not including, the newline.
    fn scan_line_comment(&mut self) -> Token {
        self.advance(); // second -
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        self.make_special(Special::LineComment, true)
    }

    /// Scans a `/* */` comment.
    fn scan_block_comment(&mut self) -> Token {
        self.advance(); // *
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return self.make_special(Special::BlockComment, true);
                }
                Some(_) => {}
                None => return self.make_special(Special::BlockComment, false),
            }
        }
    }

    /// Scans the longest run of operator characters.
    fn scan_operator(&mut self) -> Token {
        while self.peek().is_some_and(Punct::is_operator_char) {
            self.advance();
        }
        let text = &self.input[self.start..self.pos];
        self.make_token(TokenKind::Punct(Punct::from_operator(text)))
    }
}

/// A tokenizer over an immutable text buffer.
///
/// Tokens are produced on demand. [`Tokenizer::peek`] looks ahead without
/// advancing and caches what it scanned, so [`Tokenizer::consume`] after a
/// peek never rescans. Once the input is exhausted both return a
/// zero-length end-of-text token, forever.
///
/// The tokenizer never fails: malformed input shows up as unterminated
/// strings/comments or as [`Punct::UnknownOperator`].
pub struct Tokenizer<'a> {
    input: &'a str,
    /// Byte position just past the last consumed token.
    pos: usize,
    /// Scanned but unconsumed tokens, in order.
    lookahead: VecDeque<Token>,
    /// End offset of the most recently consumed token.
    last_consumed_end: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer starting at the beginning of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            lookahead: VecDeque::new(),
            last_consumed_end: None,
        }
    }

    /// Creates a tokenizer starting at byte `offset`.
    ///
    /// An offset past the end is clamped to the end; an offset inside a
    /// multi-byte character moves forward to the next character boundary.
    #[must_use]
    pub fn with_offset(input: &'a str, offset: usize) -> Self {
        let mut pos = offset.min(input.len());
        while !input.is_char_boundary(pos) {
            pos += 1;
        }
        Self {
            pos,
            ..Self::new(input)
        }
    }

    /// Tokenizes the entire input, including the final end-of-text token.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.consume();
            tokens.push(token);
            if token.is_eof() {
                break;
            }
        }
        tokens
    }

    /// Returns the end offset of the last consumed token, if any.
    #[must_use]
    pub const fn last_consumed_end(&self) -> Option<usize> {
        self.last_consumed_end
    }

    /// Returns the next token and advances past it.
    pub fn consume(&mut self) -> Token {
        let token = match self.lookahead.pop_front() {
            Some(token) => token,
            None => Scanner::new(self.input, self.pos).next_token(),
        };
        self.pos = token.span.end;
        self.last_consumed_end = Some(token.span.end);
        token
    }

    /// Returns the `k`-th unconsumed token without advancing.
    ///
    /// `peek(1)` is the token the next [`Tokenizer::consume`] returns. `k`
    /// must be at least 1; 0 is treated as 1.
    pub fn peek(&mut self, k: usize) -> Token {
        let k = k.max(1);
        while self.lookahead.len() < k {
            let from = self.lookahead.back().map_or(self.pos, |t| t.span.end);
            let token = Scanner::new(self.input, from).next_token();
            self.lookahead.push_back(token);
        }
        self.lookahead[k - 1]
    }
}

/// Yields tokens up to, not including, the end-of-text token.
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.consume();
        (!token.is_eof()).then_some(token)
    }
}
