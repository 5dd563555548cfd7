//! Tokenizer implementation
//! Main lexer structure and token generation logic

use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::Chars;

use super::literals::{is_digit, is_identifier_char, is_identifier_start, is_quote, scan_number, scan_string};
use super::state::{IndentChange, LexerState};
use super::LexerConfig;
use crate::frontend::lexer::tokens::*;
use crate::util::span::{Position, Span};

/// Main lexer structure
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    start_offset: usize,
    start_line: usize,
    start_column: usize,
    indent_width: usize,
    dedent_at_eof: bool,
    state: LexerState,
    /// Tokens produced by a single step beyond the first (INDENT/DEDENT after a NEWLINE)
    pending: VecDeque<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(
        source: &'a str,
        config: &LexerConfig,
    ) -> Self {
        Self {
            chars: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            start_offset: 0,
            start_line: 1,
            start_column: 1,
            indent_width: config.indent_width.max(1),
            dedent_at_eof: config.dedent_at_eof,
            state: LexerState::new(),
            pending: VecDeque::new(),
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Get start position of current token
    pub fn start_position(&self) -> Position {
        Position::with_offset(self.start_line, self.start_column, self.start_offset)
    }

    /// Get span of current token
    pub fn span(&self) -> Span {
        Span::new(self.start_position(), self.position())
    }

    /// Advance to next character
    pub fn advance(&mut self) -> Option<char> {
        match self.chars.next() {
            Some('\n') => {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.offset += c.len_utf8();
                self.column += 1;
                Some(c)
            }
            None => None,
        }
    }

    /// Peek at next character
    pub fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn mark_start(&mut self) {
        self.start_offset = self.offset;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Generate next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(Some(token));
        }

        while self.peek() == Some(&' ') {
            self.advance();
        }

        self.mark_start();
        let Some(c) = self.advance() else {
            return Ok(None);
        };

        let token = match c {
            '\n' => self.scan_newline()?,
            c if is_quote(c) => scan_string(self, c)?,
            c => {
                if let Some(kind) = TokenKind::from_char(c) {
                    if kind.opens_block() {
                        self.state.enter_block();
                    } else if kind.closes_block() {
                        self.state.leave_block();
                    }
                    self.make_token(kind, c.to_string())
                } else if is_digit(c) {
                    scan_number(self, c)
                } else if is_identifier_start(c) {
                    self.scan_identifier(c)
                } else {
                    return Err(LexError::UnexpectedChar {
                        ch: c,
                        position: self.start_position(),
                    });
                }
            }
        };

        Ok(Some(token))
    }

    /// Emit NEWLINE and queue the INDENT/DEDENT tokens for the next line
    fn scan_newline(&mut self) -> Result<Token, LexError> {
        let newline = self.make_token(TokenKind::Newline, "\n".to_string());

        let mut indent = 0;
        while self.at_indent_unit() {
            for _ in 0..self.indent_width {
                self.advance();
            }
            indent += 1;
        }

        if self.state.in_block() {
            return Ok(newline);
        }

        let here = Span::point(self.position());
        match self.state.transition(indent) {
            Ok(IndentChange::Unchanged) => {}
            Ok(IndentChange::Indent) => {
                self.pending.push_back(Token::marker(TokenKind::Indent, here));
            }
            Ok(IndentChange::Dedent(levels)) => {
                for _ in 0..levels {
                    self.pending.push_back(Token::marker(TokenKind::Dedent, here));
                }
            }
            Err(jump) => {
                return Err(LexError::InvalidIndentation {
                    previous: jump.previous,
                    found: jump.found,
                    position: self.position(),
                })
            }
        }

        Ok(newline)
    }

    /// Whether the next `indent_width` characters are all spaces
    fn at_indent_unit(&self) -> bool {
        let mut ahead = self.chars.clone();
        (0..self.indent_width).all(|_| ahead.next() == Some(' '))
    }

    /// Scan identifier or keyword token
    fn scan_identifier(
        &mut self,
        first_char: char,
    ) -> Token {
        let mut value = String::new();
        value.push(first_char);

        while let Some(&c) = self.peek() {
            if is_identifier_char(c) {
                value.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let kind = TokenKind::keyword(&value).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, value)
    }

    /// Tokens that close the stream: optional trailing DEDENTs, then EOF
    pub fn finish(&mut self) -> Vec<Token> {
        let here = Span::point(self.position());
        let mut tail = Vec::new();
        if self.dedent_at_eof && !self.state.in_block() {
            let levels = self.state.close_all();
            tail.extend((0..levels).map(|_| Token::marker(TokenKind::Dedent, here)));
        }
        tail.push(Token::marker(TokenKind::Eof, here));
        tail
    }

    /// Create token with current span
    pub fn make_token(
        &self,
        kind: TokenKind,
        value: String,
    ) -> Token {
        Token::new(kind, Some(value), self.span())
    }
}
