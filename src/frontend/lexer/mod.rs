//! Lexer module
//!
//! Turns source text into a flat token stream. Indentation is measured in
//! units of `indent_width` spaces at the start of each line and reported as
//! INDENT/DEDENT tokens after the NEWLINE that introduces the line. While any
//! `(`, `{` or `[` is open, indentation is not tracked.

pub mod literals;
pub mod state;
pub mod tokenizer;
pub mod tokens;
#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenKind};

/// Lexer options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Spaces per indentation level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Emit a DEDENT for every level still open when input ends
    #[serde(default)]
    pub dedent_at_eof: bool,
}

fn default_indent_width() -> usize {
    4
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            dedent_at_eof: false,
        }
    }
}

/// Tokenize source code with the default configuration
///
/// The returned stream always ends with exactly one EOF token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, &LexerConfig::default())
}

/// Tokenize source code
pub fn tokenize_with(
    source: &str,
    config: &LexerConfig,
) -> Result<Vec<Token>, LexError> {
    tracing::debug!("Tokenizing source ({} bytes)", source.len());

    let mut lexer = Lexer::new(source, config);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        log_token(&token);
        tokens.push(token);
    }
    tokens.extend(lexer.finish());

    tracing::debug!("Tokenized into {} tokens", tokens.len());
    Ok(tokens)
}

/// Log a token for debugging
fn log_token(token: &Token) {
    let class = match token.kind {
        kind if kind.is_keyword() => "keyword",
        kind if kind.is_layout() => "layout",
        TokenKind::Identifier => "identifier",
        TokenKind::IntLiteral | TokenKind::FloatLiteral => "number",
        TokenKind::StringLiteral => "string",
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Percent
        | TokenKind::Eq => "operator",
        _ => "punctuation",
    };
    tracing::trace!("{} {} at {}", class, token, token.span.start);
}
