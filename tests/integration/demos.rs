//! Tests over the sample programs in demos/

use ravenfall::frontend::parser::{Expr, ParserConfig};
use ravenfall::{parse_file, tokenize, Frontend, TokenKind};
use std::path::Path;

const BASIC: &str = include_str!("../../demos/code_basic/main.rf");
const BLOCKS: &str = include_str!("../../demos/code_basic/blocks.rf");

fn multiline_frontend() -> Frontend {
    Frontend::new().with_parser_config(ParserConfig { multiline: true })
}

#[test]
fn test_basic_demo_parses() {
    let mut frontend = multiline_frontend();
    let program = frontend.parse(BASIC).unwrap();
    let rendered: Vec<String> = program.body.iter().map(Expr::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "(1 + (2 * 3))",
            "((1 + 2) * 3)",
            "((10 - 4) - 3)",
            "((7 % 4) / 2)",
            "(\"hello\" + \"world\")",
            "((1.5 + 2.25) * 4.0)",
        ]
    );
}

#[test]
fn test_basic_demo_from_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/code_basic/main.rf");
    let mut frontend = multiline_frontend();
    let program = parse_file(&mut frontend, &path).unwrap();
    assert_eq!(program.body.len(), 6);
}

#[test]
fn test_basic_demo_needs_multiline() {
    let mut frontend = Frontend::new();
    assert!(frontend.parse(BASIC).is_err());
}

#[test]
fn test_missing_file_has_context() {
    let mut frontend = Frontend::new();
    let err = parse_file(&mut frontend, Path::new("demos/does_not_exist.rf")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn test_blocks_demo_layout() {
    let tokens = tokenize(BLOCKS).unwrap();
    let layout: Vec<TokenKind> = tokens
        .iter()
        .map(|t| t.kind)
        .filter(|k| matches!(k, TokenKind::Indent | TokenKind::Dedent))
        .collect();
    // inner, deepest, inner_again, back; nothing inside the brackets
    assert_eq!(
        layout,
        vec![
            TokenKind::Indent,
            TokenKind::Indent,
            TokenKind::Dedent,
            TokenKind::Dedent,
        ]
    );
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}
