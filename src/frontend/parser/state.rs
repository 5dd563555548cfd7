//! Parser state and token stream management

use super::ParserConfig;
use crate::frontend::lexer::tokens::*;
use crate::util::span::Span;

/// Deepest parenthesis nesting accepted before parsing gives up
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// No rule matches the current token
    #[error("Unrecognized token {found} {value:?} at {span}")]
    UnexpectedToken {
        found: TokenKind,
        value: Option<String>,
        span: Span,
    },
    /// A required token kind was missing
    #[error("Expected token of type {expected}, got {found} {value:?} instead at {span}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        value: Option<String>,
        span: Span,
    },
    /// A numeric literal that does not fit its type
    #[error("Invalid {kind} literal '{text}' at {span}")]
    InvalidLiteral {
        kind: TokenKind,
        text: String,
        span: Span,
    },
    /// Parentheses nested deeper than the parser accepts
    #[error("Expression nested deeper than {limit} levels at {span}")]
    NestingTooDeep {
        limit: usize,
        span: Span,
    },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedToken { span, .. }
            | ParseError::InvalidLiteral { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }
}

/// Cursor over a token stream
///
/// The cursor never moves past the EOF sentinel.
#[derive(Debug)]
pub struct ParserState<'a> {
    /// Token stream
    tokens: &'a [Token],
    /// Current position in token stream
    pos: usize,
    /// Number of open parentheses
    group_depth: usize,
    /// NEWLINE is insignificant inside parentheses
    multiline: bool,
}

impl<'a> ParserState<'a> {
    /// Create a new parser state
    #[inline]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            group_depth: 0,
            multiline: false,
        }
    }

    /// Create a parser state with the given options
    pub fn with_config(
        tokens: &'a [Token],
        config: &ParserConfig,
    ) -> Self {
        Self {
            multiline: config.multiline,
            ..Self::new(tokens)
        }
    }

    /// Check if at end of token stream
    #[inline]
    pub fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Get current token
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Kind of the current token; an exhausted stream reads as EOF
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    /// Check the current token kind
    #[inline]
    pub fn at(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.current_kind() == kind
    }

    /// Span of the current token, or of the last token once exhausted
    pub fn span(&self) -> Span {
        self.current()
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or_else(Span::dummy)
    }

    /// Consume and return the current token
    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        Some(token)
    }

    /// Consume the current token if it has the given kind
    pub fn skip(
        &mut self,
        kind: TokenKind,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail
    pub fn expect(
        &mut self,
        kind: TokenKind,
    ) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.bump();
                Ok(token)
            }
            found => Err(ParseError::ExpectedToken {
                expected: kind,
                found: found.map(|t| t.kind).unwrap_or(TokenKind::Eof),
                value: found.and_then(|t| t.value.clone()),
                span: self.span(),
            }),
        }
    }

    /// Error for a token no rule accepts
    pub fn unexpected(&self) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            found: self.current_kind(),
            value: token.and_then(|t| t.value.clone()),
            span: self.span(),
        }
    }

    /// Open a parenthesised group, failing past [`MAX_NESTING_DEPTH`]
    pub fn enter_group(&mut self) -> Result<(), ParseError> {
        if self.group_depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                span: self.span(),
            });
        }
        self.group_depth += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.group_depth = self.group_depth.saturating_sub(1);
    }

    /// Skip NEWLINE tokens while inside parentheses, in multiline mode only
    pub fn skip_grouped_newlines(&mut self) {
        if self.multiline && self.group_depth > 0 {
            while self.skip(TokenKind::Newline) {}
        }
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.pos
    }
}
