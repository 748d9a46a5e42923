use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A syntax diagnostic recorded during parsing.
///
/// Diagnostics are plain values appended to the parser's collector; they
/// never unwind through grammar rules. A parse with diagnostics still yields
/// a traversable program, and callers decide whether any diagnostics
/// constitute a hard failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    position: Position,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position) -> Self {
        Diagnostic { kind, position }
    }

    pub fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn name(&self) -> &'static str {
        match &self.kind {
            DiagnosticKind::UnexpectedToken { .. } => "UnexpectedToken",
            DiagnosticKind::MissingPrefixRule { .. } => "MissingPrefixRule",
            DiagnosticKind::MalformedNumericLiteral { .. } => "MalformedNumericLiteral",
            DiagnosticKind::MalformedStatement { .. } => "MalformedStatement",
            DiagnosticKind::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.name(),
            self.position.line,
            self.position.column,
            self.kind
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    #[error("expected `{expected}`, got `{found}`")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse rule for `{kind}` (`{literal}`)")]
    MissingPrefixRule { kind: TokenKind, literal: String },
    #[error("could not parse `{literal}` as {target}")]
    MalformedNumericLiteral { literal: String, target: &'static str },
    #[error("{message}")]
    MalformedStatement { message: String },
    #[error("expression nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },
}
