//! Span 单元测试
//!
//! 测试源位置跟踪的 Position、Span 和 SourceFile

use crate::util::span::{Position, SourceFile, Span};

mod position_tests {
    use super::*;

    #[test]
    fn test_position_with_offset() {
        let pos = Position::with_offset(1, 5, 100);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 100);
    }

    #[test]
    fn test_position_start() {
        assert_eq!(Position::start(), Position::with_offset(1, 1, 0));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(10, 20)), "10:20");
    }
}

mod span_tests {
    use super::*;

    #[test]
    fn test_span_dummy() {
        assert!(Span::dummy().is_dummy());
        let real = Span::new(Position::new(1, 1), Position::new(1, 10));
        assert!(!real.is_dummy());
    }

    #[test]
    fn test_span_point_is_empty() {
        let span = Span::point(Position::with_offset(2, 3, 7));
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(
            Position::with_offset(1, 1, 4),
            Position::with_offset(1, 5, 8),
        );
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(Position::new(1, 1), Position::new(1, 10));
        assert_eq!(format!("{}", span), "[1:1 - 1:10]");
    }
}

mod source_file_tests {
    use super::*;

    fn file(content: &str) -> SourceFile {
        SourceFile::new("main.rf".to_string(), content.to_string())
    }

    #[test]
    fn test_source_file_display() {
        assert_eq!(format!("{}", file("")), "main.rf");
    }

    #[test]
    fn test_position_from_offset_multiline() {
        let file = file("line1\nline2\nline3");

        let pos = file.position_from_offset(0);
        assert_eq!((pos.line, pos.column), (1, 1));

        let pos = file.position_from_offset(5);
        assert_eq!((pos.line, pos.column), (1, 6));

        let pos = file.position_from_offset(6);
        assert_eq!((pos.line, pos.column), (2, 1));

        let pos = file.position_from_offset(14);
        assert_eq!((pos.line, pos.column), (3, 3));
    }

    #[test]
    fn test_line_text() {
        let file = file("1 + 2\n    3\n");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_text(1), Some("1 + 2"));
        assert_eq!(file.line_text(2), Some("    3"));
        assert_eq!(file.line_text(3), Some(""));
        assert_eq!(file.line_text(0), None);
        assert_eq!(file.line_text(4), None);
    }

    #[test]
    fn test_source_text() {
        let file = file("hello world");
        let span = Span::new(
            Position::with_offset(1, 1, 0),
            Position::with_offset(1, 6, 5),
        );
        assert_eq!(file.source_text(span), Some("hello"));

        let out_of_range = Span::new(
            Position::with_offset(1, 1, 10),
            Position::with_offset(1, 1, 15),
        );
        assert_eq!(file.source_text(out_of_range), None);
    }
}
