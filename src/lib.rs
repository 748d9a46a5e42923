#![allow(clippy::module_inception)]

use crate::errors::errors::Diagnostic;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A 1-based line/column position in the source text.
///
/// Tokens carry the position of their first character; diagnostics point at
/// the token that triggered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

/// Returns the text of the given 1-based line, if the source has that many
/// lines.
pub fn line_text(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line as usize - 1)
}

pub fn display_diagnostic(diagnostic: &Diagnostic, source: &str, file: &str) {
    /*
        Error: UnexpectedToken (expected `=`, got `5`)
        -> script.hel:20:7
           |
        20 | let a 5;
           | ------^
    */

    let position = diagnostic.position();

    println!("Error: {} ({})", diagnostic.name(), diagnostic.kind());
    println!("-> {}:{}:{}", file, position.line, position.column);

    let Some(line) = line_text(source, position.line) else {
        return;
    };

    let line_label = position.line.to_string();
    let padding = line_label.len() + 2;

    let trimmed = line.trim_start();
    let removed = line.len() - trimmed.len();

    println!("{:>padding$}", "|");
    println!("{} | {}", line_label, trimmed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed).max(1);
    println!("{:>padding$} {:->arrows$}", "|", "^");
}

#[cfg(test)]
mod tests {
    use super::line_text;

    #[test]
    fn test_line_text() {
        let source = "let x = 5;\nlet y = 10;\n\nreturn x;";

        assert_eq!(line_text(source, 1), Some("let x = 5;"));
        assert_eq!(line_text(source, 2), Some("let y = 10;"));
        assert_eq!(line_text(source, 3), Some(""));
        assert_eq!(line_text(source, 4), Some("return x;"));
        assert_eq!(line_text(source, 5), None);
        assert_eq!(line_text(source, 0), None);
    }
}
