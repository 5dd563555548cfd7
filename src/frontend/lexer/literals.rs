//! Literal scanning implementations
//! Handles number and string literals

use super::tokenizer::Lexer;
use crate::frontend::lexer::tokens::*;

/// Scan a decimal number literal.
///
/// Digits, optionally followed by one `.` and its digit run. A second `.`
/// ends the literal and is lexed on its own, so `1.2.3` yields `1.2` `.` `3`.
pub fn scan_number(
    lexer: &mut Lexer<'_>,
    first_char: char,
) -> Token {
    let mut value = String::new();
    value.push(first_char);
    let mut period_found = false;

    while let Some(&c) = lexer.peek() {
        if is_digit(c) {
            value.push(c);
            lexer.advance();
        } else if c == '.' && !period_found {
            period_found = true;
            value.push(c);
            lexer.advance();
        } else {
            break;
        }
    }

    let kind = if period_found {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntLiteral
    };
    lexer.make_token(kind, value)
}

/// Scan a string literal; the opening quote has already been consumed.
///
/// Everything up to the next matching quote is taken verbatim, with no
/// escape processing.
pub fn scan_string(
    lexer: &mut Lexer<'_>,
    quote: char,
) -> Result<Token, LexError> {
    let mut value = String::new();

    loop {
        match lexer.advance() {
            Some(c) if c == quote => return Ok(lexer.make_token(TokenKind::StringLiteral, value)),
            Some(c) => value.push(c),
            None => {
                return Err(LexError::UnterminatedString {
                    position: lexer.start_position(),
                })
            }
        }
    }
}

/// Check if character is a decimal digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if character can start an identifier
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Check if character can continue an identifier
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check if character opens a string literal
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}
