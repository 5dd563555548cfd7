//! Lexer tests module
//!
//! - basic: 基础测试（标识符、关键字、标点、位置）
//! - literals: 字面量测试（整数、浮点、字符串）
//! - indentation: 缩进与括号嵌套
//! - errors: 错误处理测试
//! - props: proptest 性质测试

mod props;

use super::{tokenize, tokenize_with, LexerConfig, Token, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn kinds_with(
    source: &str,
    config: &LexerConfig,
) -> Vec<TokenKind> {
    tokenize_with(source, config)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn values(tokens: &[Token]) -> Vec<Option<&str>> {
    tokens.iter().map(|t| t.value.as_deref()).collect()
}
