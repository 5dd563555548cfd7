//! Parser tests module
//!
//! - basic: 基础语法解析测试（优先级、结合性、分组）
//! - errors: 语法错误测试
//! - state: ParserState 单元测试


use crate::frontend::lexer::tokenize;
use crate::frontend::parser::{parse, BinaryOp, Expr, ParseError, Parser, ParserConfig, Program};

fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source).expect("lexing failed");
    parse(&tokens)
}

fn parse_multiline(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source).expect("lexing failed");
    Parser::with_config(ParserConfig { multiline: true }).produce_ast(&tokens)
}

fn parse_one(source: &str) -> Expr {
    let program = parse_source(source).unwrap();
    assert_eq!(program.body.len(), 1, "expected one statement in {source:?}");
    program.body.into_iter().next().unwrap()
}

fn int(n: i64) -> Expr {
    Expr::IntLiteral(n)
}

fn bin(
    left: Expr,
    op: BinaryOp,
    right: Expr,
) -> Expr {
    Expr::binary(left, op, right)
}
