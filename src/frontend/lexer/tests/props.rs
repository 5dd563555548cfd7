//! 性质测试 (proptest)

use super::*;
use proptest::prelude::*;

/// Per-line indentation levels, starting at zero, each at most one deeper than the last
fn indent_levels() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..4, 0..12).prop_map(|steps| {
        let mut level = 0usize;
        let mut levels = vec![0];
        for step in steps {
            level = match step {
                0 => level + 1,
                n => level.saturating_sub(n - 1),
            };
            levels.push(level);
        }
        levels
    })
}

proptest! {
    #[test]
    fn eof_is_always_last_and_unique(source in "\\PC{0,64}") {
        if let Ok(tokens) = tokenize(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        }
    }

    #[test]
    fn brackets_suppress_layout_tokens(body in "[0-9+*/ \n]{0,48}", open in 0usize..3) {
        let (l, r) = [("(", ")"), ("{", "}"), ("[", "]")][open];
        let source = format!("{l}{body}{r}");
        let tokens = tokenize(&source).unwrap();
        prop_assert!(tokens
            .iter()
            .all(|t| t.kind != TokenKind::Indent && t.kind != TokenKind::Dedent));
    }

    #[test]
    fn indents_and_dedents_match_level_changes(levels in indent_levels()) {
        let source = levels
            .iter()
            .map(|&level| format!("{}x", "    ".repeat(level)))
            .collect::<Vec<_>>()
            .join("\n");

        let mut expected_indents = 0;
        let mut expected_dedents = 0;
        for pair in levels.windows(2) {
            if pair[1] > pair[0] {
                expected_indents += 1;
            } else {
                expected_dedents += pair[0] - pair[1];
            }
        }

        let tokens = tokenize(&source).unwrap();
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
        prop_assert_eq!(indents, expected_indents);
        prop_assert_eq!(dedents, expected_dedents);
    }
}
