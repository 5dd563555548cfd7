//! Expression parsing
//!
//! Recursive descent with one function per precedence tier, lowest first:
//!
//! ```text
//! Expression     := Additive
//! Additive       := Multiplicative (('+' | '-') Multiplicative)*
//! Multiplicative := Primary (('*' | '/' | '%') Primary)*
//! Primary        := INT | FLOAT | STRING | '(' Expression ')'
//! ```
//!
//! Each binary tier folds into a left-growing chain, so `a - b - c` is
//! `(a - b) - c`.

use super::ast::*;
use super::state::*;
use crate::frontend::lexer::tokens::*;

const ADDITIVE_OPS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
const MULTIPLICATIVE_OPS: &[TokenKind] = &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent];

impl<'a> ParserState<'a> {
    /// Parse a statement
    pub fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        self.parse_expression()
    }

    /// Parse an expression
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_tier(ADDITIVE_OPS, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_tier(MULTIPLICATIVE_OPS, Self::parse_primary)
    }

    /// One left-associative tier: `operand (op operand)*`
    fn parse_binary_tier(
        &mut self,
        ops: &[TokenKind],
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = operand(self)?;

        loop {
            self.skip_grouped_newlines();
            let kind = self.current_kind();
            if !ops.contains(&kind) {
                break;
            }
            let Some(op) = BinaryOp::from_token(kind) else {
                break;
            };
            self.bump();
            let right = operand(self)?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        self.skip_grouped_newlines();

        match self.current_kind() {
            TokenKind::IntLiteral => {
                let token = self.bump().ok_or_else(|| self.unexpected())?;
                token
                    .text()
                    .parse()
                    .map(Expr::IntLiteral)
                    .map_err(|_| invalid_literal(token))
            }
            TokenKind::FloatLiteral => {
                let token = self.bump().ok_or_else(|| self.unexpected())?;
                token
                    .text()
                    .parse()
                    .map(Expr::FloatLiteral)
                    .map_err(|_| invalid_literal(token))
            }
            TokenKind::StringLiteral => {
                let token = self.bump().ok_or_else(|| self.unexpected())?;
                Ok(Expr::StringLiteral(token.text().to_string()))
            }
            TokenKind::LParen => {
                self.enter_group()?;
                self.bump();
                let value = self.parse_expression()?;
                self.skip_grouped_newlines();
                self.expect(TokenKind::RParen)?;
                self.leave_group();
                Ok(value)
            }
            _ => Err(self.unexpected()),
        }
    }
}

fn invalid_literal(token: &Token) -> ParseError {
    ParseError::InvalidLiteral {
        kind: token.kind,
        text: token.text().to_string(),
        span: token.span,
    }
}
