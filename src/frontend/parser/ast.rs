//! Abstract Syntax Tree types

use serde::Serialize;
use std::fmt;

use crate::frontend::lexer::TokenKind;

/// Root of a parsed source file
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Program {
    /// Statements in source order
    pub body: Vec<Stmt>,
}

/// Statement. Only expression statements exist in the current grammar.
pub type Stmt = Expr;

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        right: Box<Expr>,
        op: BinaryOp,
    },
    Identifier(String),
    IntLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    /// Declared for completeness; the grammar has no boolean literal yet
    BooleanLiteral(bool),
}

impl Expr {
    pub fn binary(
        left: Expr,
        op: BinaryOp,
        right: Expr,
    ) -> Self {
        Expr::Binary {
            left: Box::new(left),
            right: Box::new(right),
            op,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Binary { .. } => NodeKind::BinaryExpression,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::IntLiteral(_) => NodeKind::IntLiteral,
            Expr::FloatLiteral(_) => NodeKind::FloatLiteral,
            Expr::StringLiteral(_) => NodeKind::StringLiteral,
            Expr::BooleanLiteral(_) => NodeKind::BooleanLiteral,
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Operator for an operator token
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

/// Node classes, used as the identity of a node by the type checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Program,
    BinaryExpression,
    Identifier,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    BooleanLiteral,
}

impl fmt::Display for BinaryOp {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Fully parenthesised rendering: `(1 + (2 * 3))`
impl fmt::Display for Expr {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expr::Binary { left, right, op } => write!(f, "({} {} {})", left, op, right),
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::IntLiteral(n) => write!(f, "{}", n),
            Expr::FloatLiteral(x) => write!(f, "{:?}", x),
            Expr::StringLiteral(s) => write!(f, "{:?}", s),
            Expr::BooleanLiteral(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for stmt in &self.body {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
