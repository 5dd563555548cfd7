//! End-to-end tests through the public API

use ravenfall::frontend::lexer::{tokenize_with, LexerConfig};
use ravenfall::frontend::parser::{BinaryOp, Expr, ParserConfig};
use ravenfall::frontend::typecheck::check_program;
use ravenfall::{tokenize, Frontend, FrontendError, LexError, ParseError, Parser, TokenKind};

#[test]
fn test_tokenize_then_parse() {
    let tokens = tokenize("1 + 2 * 3").unwrap();
    let program = Parser::new().produce_ast(&tokens).unwrap();
    assert_eq!(
        program.body,
        vec![Expr::binary(
            Expr::IntLiteral(1),
            BinaryOp::Add,
            Expr::binary(Expr::IntLiteral(2), BinaryOp::Mul, Expr::IntLiteral(3)),
        )]
    );
}

#[test]
fn test_lex_error_surfaces_through_frontend() {
    let mut frontend = Frontend::new();
    match frontend.parse("1 + @") {
        Err(FrontendError::Lex(LexError::UnexpectedChar { ch, position })) => {
            assert_eq!(ch, '@');
            assert_eq!(position.column, 5);
        }
        other => panic!("expected lex error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_surfaces_through_frontend() {
    let mut frontend = Frontend::new();
    assert!(matches!(
        frontend.parse("(1 + 2"),
        Err(FrontendError::Parse(ParseError::ExpectedToken {
            expected: TokenKind::RParen,
            ..
        }))
    ));
}

#[test]
fn test_tokens_serialize_to_json() {
    let tokens = tokenize("42\n").unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["kind"], "IntLiteral");
    assert_eq!(json[0]["value"], "42");
    assert_eq!(json[0]["span"]["start"]["line"], 1);
    assert_eq!(json[1]["kind"], "Newline");
    assert!(json[2]["value"].is_null());
}

#[test]
fn test_ast_serializes_to_json() {
    let tokens = tokenize("1 - 2.5").unwrap();
    let program = Parser::new().produce_ast(&tokens).unwrap();
    let json = serde_json::to_value(&program).unwrap();
    let binary = &json["body"][0]["Binary"];
    assert_eq!(binary["op"], "Sub");
    assert_eq!(binary["left"]["IntLiteral"], 1);
    assert_eq!(binary["right"]["FloatLiteral"], 2.5);
}

#[test]
fn test_ast_serializes_to_ron() {
    let tokens = tokenize("'a'").unwrap();
    let program = Parser::new().produce_ast(&tokens).unwrap();
    let text = ron::to_string(&program).unwrap();
    assert!(text.contains("StringLiteral(\"a\")"), "{text}");
}

#[test]
fn test_type_check_after_parse() {
    let mut frontend = Frontend::new().with_parser_config(ParserConfig { multiline: true });
    let program = frontend.parse("1 + 2\n3.0 * 2").unwrap();
    assert!(check_program(&program).is_err());
}

#[test]
fn test_trailing_dedents_are_opt_in() {
    let source = "a\n    b";
    let default = tokenize(source).unwrap();
    assert!(!default.iter().any(|t| t.kind == TokenKind::Dedent));

    let config = LexerConfig {
        dedent_at_eof: true,
        ..LexerConfig::default()
    };
    let flushed = tokenize_with(source, &config).unwrap();
    let tail: Vec<_> = flushed.iter().rev().take(2).map(|t| t.kind).collect();
    assert_eq!(tail, vec![TokenKind::Eof, TokenKind::Dedent]);
}

#[test]
fn test_line_statements_are_opt_in() {
    let tokens = tokenize("1 + 2\n3").unwrap();
    assert!(matches!(
        Parser::new().produce_ast(&tokens),
        Err(ParseError::UnexpectedToken {
            found: TokenKind::Newline,
            ..
        })
    ));

    let program = Parser::with_config(ParserConfig { multiline: true })
        .produce_ast(&tokens)
        .unwrap();
    assert_eq!(program.body.len(), 2);
}

#[test]
fn test_deep_nesting_is_a_parse_error() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let mut frontend = Frontend::new();
    assert!(matches!(
        frontend.parse(&source),
        Err(FrontendError::Parse(ParseError::NestingTooDeep { .. }))
    ));
}
