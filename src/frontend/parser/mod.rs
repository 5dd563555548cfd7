//! Parser module
//!
//! Recursive-descent parser turning a token stream into a [`Program`].
//!
//! By default a program is a plain run of expressions up to EOF, and any
//! NEWLINE, INDENT or DEDENT token where an operand is expected is an error.
//! With [`ParserConfig::multiline`] set, NEWLINE separates statements and is
//! skipped inside parentheses; INDENT and DEDENT are still rejected.

pub mod ast;
pub mod expr;
pub mod state;
#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ast::*;
pub use state::{ParseError, ParserState, MAX_NESTING_DEPTH};

use serde::{Deserialize, Serialize};

use crate::frontend::lexer::tokens::*;

/// Parser options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Treat NEWLINE as a statement separator and ignore it inside `( )`
    #[serde(default)]
    pub multiline: bool,
}

/// Reusable parser front end
///
/// Every call starts from a fresh cursor; nothing carries over between calls.
#[derive(Debug, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a whole token stream into a program
    pub fn produce_ast(
        &mut self,
        tokens: &[Token],
    ) -> Result<Program, ParseError> {
        tracing::debug!("Parsing {} tokens", tokens.len());

        let mut state = ParserState::with_config(tokens, &self.config);
        let mut body = Vec::new();

        while !state.at_end() {
            // Blank lines and statement separators
            if self.config.multiline && state.skip(TokenKind::Newline) {
                continue;
            }
            let stmt = state.parse_statement()?;
            tracing::trace!("Parsed statement {}: {}", body.len(), stmt);
            body.push(stmt);
        }

        tracing::debug!("Parsed {} statements", body.len());
        Ok(Program { body })
    }
}

/// Parse tokens into a program
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new().produce_ast(tokens)
}

/// Parse a single expression; anything other than EOF after it is an error
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut state = ParserState::new(tokens);
    let expr = state.parse_expression()?;
    state.expect(TokenKind::Eof)?;
    Ok(expr)
}
