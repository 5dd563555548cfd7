//! Ravenfall Programming Language
//!
//! Front end for a small indentation-sensitive language: a tokenizer that
//! tracks indentation blocks and bracket nesting, and a recursive-descent
//! parser for arithmetic expressions.
//!
//! # Example
//!
//! ```
//! use ravenfall::frontend::lexer::tokenize;
//! use ravenfall::frontend::parser::Parser;
//!
//! let tokens = tokenize("(1 + 2) * 3").unwrap();
//! let program = Parser::new().produce_ast(&tokens).unwrap();
//! assert_eq!(program.body[0].to_string(), "((1 + 2) * 3)");
//! ```

#![doc(html_root_url = "https://docs.rs/ravenfall")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::lexer::{tokenize, LexError, Token, TokenKind};
pub use frontend::parser::{ParseError, Parser, Program};
pub use frontend::{Frontend, FrontendError};

use ::std::fs;
use ::std::path::Path;
use tracing::debug;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Ravenfall";

/// Read a source file
pub fn read_source(path: &Path) -> Result<String> {
    debug!("Reading file: {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Tokenize and parse a source file
pub fn parse_file(
    frontend: &mut Frontend,
    path: &Path,
) -> Result<Program> {
    let source = read_source(path)?;
    let program = frontend
        .parse(&source)
        .with_context(|| format!("Failed to parse: {}", path.display()))?;
    Ok(program)
}
