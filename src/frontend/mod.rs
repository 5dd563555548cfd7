//! Frontend compilation pipeline
//!
//! This module contains the lexer, parser, and type checker.
//! Source text flows one way: lexer → token stream → parser → AST.

use thiserror::Error;
use tracing::debug;

pub mod lexer;
pub mod parser;
pub mod typecheck;

use lexer::{LexError, LexerConfig, Token};
use parser::{ParseError, Parser, ParserConfig, Program};
use typecheck::TypeError;

/// Frontend context
#[derive(Debug, Default)]
pub struct Frontend {
    /// Lexer options
    config: LexerConfig,
    parser: Parser,
}

impl Frontend {
    /// Create a frontend with default lexer options
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frontend with the given lexer options
    pub fn with_config(config: LexerConfig) -> Self {
        Self {
            config,
            parser: Parser::new(),
        }
    }

    /// Replace the parser options
    pub fn with_parser_config(
        mut self,
        config: ParserConfig,
    ) -> Self {
        self.parser = Parser::with_config(config);
        self
    }

    /// Lexical analysis
    pub fn tokenize(
        &self,
        source: &str,
    ) -> Result<Vec<Token>, FrontendError> {
        Ok(lexer::tokenize_with(source, &self.config)?)
    }

    /// Lexical analysis and parsing
    pub fn parse(
        &mut self,
        source: &str,
    ) -> Result<Program, FrontendError> {
        let tokens = self.tokenize(source)?;
        debug!("Starting parsing...");
        let program = self.parser.produce_ast(&tokens)?;
        debug!("Parsing successful, got {} statements", program.body.len());
        Ok(program)
    }

    /// Parse and type check
    pub fn check(
        &mut self,
        source: &str,
    ) -> Result<Program, FrontendError> {
        let program = self.parse(source)?;
        typecheck::check_program(&program)?;
        debug!("Type checking successful");
        Ok(program)
    }
}

/// Frontend errors
#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Type error: {0}")]
    Type(#[from] TypeError),
}

impl FrontendError {
    /// Line of the offending source, when known
    pub fn line(&self) -> Option<usize> {
        let line = match self {
            FrontendError::Lex(e) => e.position().line,
            FrontendError::Parse(e) => e.span().start.line,
            FrontendError::Type(_) => return None,
        };
        (line > 0).then_some(line)
    }
}
