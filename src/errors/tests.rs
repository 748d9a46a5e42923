use crate::lexer::tokens::TokenKind;
use crate::Position;

use super::errors::{Diagnostic, DiagnosticKind};

#[test]
fn test_unexpected_token_display() {
    let diagnostic = Diagnostic::new(
        DiagnosticKind::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::RBrace,
        },
        Position { line: 3, column: 7 },
    );

    assert_eq!(diagnostic.name(), "UnexpectedToken");
    assert_eq!(
        diagnostic.to_string(),
        "UnexpectedToken at 3:7: expected `;`, got `}`"
    );
}

#[test]
fn test_missing_prefix_rule_display() {
    let diagnostic = Diagnostic::new(
        DiagnosticKind::MissingPrefixRule {
            kind: TokenKind::Plus,
            literal: String::from("+"),
        },
        Position { line: 1, column: 1 },
    );

    assert_eq!(
        diagnostic.to_string(),
        "MissingPrefixRule at 1:1: no prefix parse rule for `+` (`+`)"
    );
}

#[test]
fn test_malformed_numeric_literal_display() {
    let diagnostic = Diagnostic::new(
        DiagnosticKind::MalformedNumericLiteral {
            literal: String::from("1.2.3"),
            target: "a float",
        },
        Position { line: 2, column: 9 },
    );

    assert_eq!(
        diagnostic.to_string(),
        "MalformedNumericLiteral at 2:9: could not parse `1.2.3` as a float"
    );
}

#[test]
fn test_malformed_statement_display() {
    let diagnostic = Diagnostic::new(
        DiagnosticKind::MalformedStatement {
            message: String::from("expected identifier after `let`"),
        },
        Position { line: 1, column: 5 },
    );

    assert_eq!(diagnostic.name(), "MalformedStatement");
    assert_eq!(
        diagnostic.to_string(),
        "MalformedStatement at 1:5: expected identifier after `let`"
    );
}

#[test]
fn test_nesting_too_deep_display() {
    let diagnostic = Diagnostic::new(
        DiagnosticKind::NestingTooDeep { limit: 128 },
        Position { line: 1, column: 64 },
    );

    assert_eq!(
        diagnostic.to_string(),
        "NestingTooDeep at 1:64: expression nesting exceeds the maximum depth of 128"
    );
}

#[test]
fn test_position_accessor() {
    let position = Position { line: 4, column: 2 };
    let diagnostic = Diagnostic::new(
        DiagnosticKind::MalformedStatement {
            message: String::from("cannot assign to `5`"),
        },
        position,
    );

    assert_eq!(diagnostic.position(), position);
    assert!(matches!(
        diagnostic.kind(),
        DiagnosticKind::MalformedStatement { .. }
    ));
}
