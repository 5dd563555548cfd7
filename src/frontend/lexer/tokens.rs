//! Token types

use serde::Serialize;
use std::fmt;

use crate::util::span::{Position, Span};

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("Unrecognized character '{ch}' found during tokenization at {position}")]
    UnexpectedChar { ch: char, position: Position },
    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },
    #[error(
        "Invalid indentation at {position}: indent level jumped from {previous} to {found}"
    )]
    InvalidIndentation {
        previous: usize,
        found: usize,
        position: Position,
    },
}

impl LexError {
    /// Where in the source the error was detected
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedChar { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::InvalidIndentation { position, .. } => *position,
        }
    }
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Literals
    IntLiteral,
    FloatLiteral,
    StringLiteral,

    // Operators
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dot,
    Comma,
    Colon,

    // Layout
    Newline,
    Indent,
    Dedent,

    Identifier,

    // Keywords
    KwLet,
    KwMut,

    // Special
    Eof,
}

impl TokenKind {
    /// Single-character token table
    pub fn from_char(c: char) -> Option<TokenKind> {
        let kind = match c {
            '=' => TokenKind::Eq,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '.' => TokenKind::Dot,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            _ => return None,
        };
        Some(kind)
    }

    /// Reserved word table
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "let" => Some(TokenKind::KwLet),
            "mut" => Some(TokenKind::KwMut),
            _ => None,
        }
    }

    /// `(`, `{` or `[`
    pub fn opens_block(self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket
        )
    }

    /// `)`, `}` or `]`
    pub fn closes_block(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket
        )
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::KwLet | TokenKind::KwMut)
    }

    /// INDENT, DEDENT and NEWLINE
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            TokenKind::IntLiteral => "INT",
            TokenKind::FloatLiteral => "FLOAT",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Eq => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::KwLet => "let",
            TokenKind::KwMut => "mut",
            TokenKind::Eof => "EOF",
        };
        f.write_str(s)
    }
}

/// Token
///
/// `value` holds the source text for literals, identifiers, keywords and
/// punctuation; it is `None` for INDENT, DEDENT and EOF.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        value: Option<String>,
        span: Span,
    ) -> Self {
        Self { kind, value, span }
    }

    /// Structural marker with no text
    pub fn marker(
        kind: TokenKind,
        span: Span,
    ) -> Self {
        Self::new(kind, None, span)
    }

    /// Token text, empty for markers
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match (self.kind, &self.value) {
            (TokenKind::Newline, _) | (_, None) => write!(f, "{}", self.kind),
            (_, Some(value)) => write!(f, "{}({:?})", self.kind, value),
        }
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token {
            kind,
            value: None,
            span: Span::dummy(),
        }
    }
}
