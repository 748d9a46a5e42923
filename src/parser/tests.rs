use crate::ast::ast::Program;
use crate::ast::expressions::Expr;
use crate::ast::statements::Stmt;
use crate::errors::errors::{Diagnostic, DiagnosticKind};
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::TokenKind;

use super::lookups::create_token_lookups;
use super::parser::{parse, Parser};

fn parse_source(source: &str) -> (Program, Vec<Diagnostic>) {
    parse(tokenize(source))
}

/// Parses source expected to be well-formed and returns the program.
fn parse_clean(source: &str) -> Program {
    let (program, diagnostics) = parse_source(source);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {:?}: {:?}",
        source,
        diagnostics
    );
    program
}

fn assert_renders(source: &str, expected: &str) {
    assert_eq!(parse_clean(source).to_string(), expected, "source: {:?}", source);
}

#[test]
fn test_let_statements() {
    assert_renders("let x = 5;", "let x = 5;");
    assert_renders("let name = \"helios\";", "let name = helios;");
    assert_renders("let y = x;", "let y = x;");
}

#[test]
fn test_let_without_trailing_semicolon() {
    assert_renders("let x = 5 let y = 6", "let x = 5; let y = 6;");
}

#[test]
fn test_return_statements() {
    assert_renders("return 5;", "return 5;");
    assert_renders("return 5 + 10;", "return (5 + 10);");
    assert_renders("return;", "return ;");
    assert_renders("return", "return ;");
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("x + y * z", "(x + (y * z))"),
        ("x * y + z", "((x * y) + z)"),
        ("-x * y", "((-x) * y)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("3 >= 5 != false", "((3 >= 5) != false)"),
        ("1 + 2 <= 3", "((1 + 2) <= 3)"),
        ("(a + b) * c", "((a + b) * c)"),
        ("-(a + b)", "(-(a + b))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        ("a * items[0]", "(a * (items[0]))"),
        ("-a(1)", "(-a(1))"),
    ];

    for (source, expected) in cases {
        assert_renders(source, expected);
    }
}

#[test]
fn test_ternary_expressions() {
    assert_renders("a ? b : c", "(a ? b : c)");
    // The false branch binds the rest, so chains nest to the right.
    assert_renders("a ? b : c ? d : e", "(a ? b : (c ? d : e))");
    assert_renders("x > 0 ? x : -x", "((x > 0) ? x : (-x))");
}

#[test]
fn test_assignment_expressions() {
    assert_renders("x = 5", "x = 5");
    assert_renders("x = y = z", "x = y = z");
    assert_renders("items[0] = 5", "(items[0]) = 5");
    assert_renders("x = true ? 1 : 0", "x = (true ? 1 : 0)");

    // Right-associativity is a structural fact, not just a rendering one.
    let program = parse_clean("x = y = z");
    let Stmt::Expression {
        expr: Expr::Assignment { target, value, .. },
    } = &program.statements[0]
    else {
        panic!("expected an assignment statement");
    };
    assert!(matches!(**target, Expr::Identifier { .. }));
    assert!(matches!(**value, Expr::Assignment { .. }));
}

#[test]
fn test_assignment_to_non_target_reports_but_builds() {
    let (program, diagnostics) = parse_source("5 = 3;");

    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::MalformedStatement { .. }
    ));
    // The node is still built so the tree stays traversable.
    assert_eq!(program.to_string(), "5 = 3");
}

#[test]
fn test_call_expressions() {
    assert_renders("add(1, 2 * 3, 4 + 5)", "add(1, (2 * 3), (4 + 5))");
    assert_renders("print()", "print()");
    assert_renders("fn(x) { x }(5)", "fn(x) {x}(5)");
}

#[test]
fn test_index_expressions() {
    assert_renders("a[1 + 1]", "(a[(1 + 1)])");
    assert_renders("a[0][1]", "((a[0])[1])");
}

#[test]
fn test_array_literals() {
    assert_renders("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)]");
    assert_renders("[]", "[]");
}

#[test]
fn test_hash_literals_render_sorted() {
    assert_renders("{\"b\": 2, \"a\": 1}", "{a:1, b:2}");
    assert_renders("{}", "{}");
    assert_renders("{1: \"one\", 2: \"two\"}", "{1:one, 2:two}");
}

#[test]
fn test_hash_literal_duplicate_key_replaces_value() {
    assert_renders("{\"a\": 1, \"a\": 2}", "{a:2}");
}

#[test]
fn test_if_expressions() {
    assert_renders("if x { a }", "if x { a }");
    assert_renders("if x { a } else { b }", "if x { a } else { b }");
    assert_renders("if (true) {}", "if true {  }");
    assert_renders("if x < y { x; y }", "if (x < y) { xy }");
}

#[test]
fn test_function_literals() {
    assert_renders("fn(x, y) { x + y }", "fn(x, y) {(x + y)}");
    assert_renders("fn() {}", "fn() {}");
    assert_renders("fn(a) { return a; }", "fn(a) {return a;}");
}

#[test]
fn test_for_expressions() {
    assert_renders("for i in 10 {}", "for i in 10 {}");
    assert_renders("for i in [1, 2] { i }", "for i in [1, 2] { i; }");
}

#[test]
fn test_for_without_loop_variable() {
    let (_, diagnostics) = parse_source("for in 10 {}");

    assert!(!diagnostics.is_empty());
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::MalformedStatement { .. }
    ));
}

#[test]
fn test_while_expressions() {
    assert_renders("while x < 5 { x = x + 1; }", "while (x < 5) { x = (x + 1) }");
}

#[test]
fn test_try_catch_expressions() {
    assert_renders("try { x } catch { y }", "try {x} catch {y}");
}

#[test]
fn test_float_literals() {
    assert_renders("3.14", "3.14");

    let program = parse_clean("let pi = 3.14;");
    let Stmt::Let {
        value: Some(Expr::FloatLiteral { value, .. }),
        ..
    } = &program.statements[0]
    else {
        panic!("expected a float let statement");
    };
    assert_eq!(*value, 3.14);
}

#[test]
fn test_malformed_numeric_literals() {
    // Ten nines past i64::MAX.
    let (_, diagnostics) = parse_source("99999999999999999999;");
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::MalformedNumericLiteral { target: "an integer", .. }
    ));

    // Lexes as a single Float token, fails the f64 parse.
    let (_, diagnostics) = parse_source("1.2.3;");
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::MalformedNumericLiteral { target: "a float", .. }
    ));
}

#[test]
fn test_recovery_after_malformed_let() {
    let (program, diagnostics) = parse_source("let = 5; let y = 10;");

    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::MalformedStatement { .. }
    ));
    // The second statement survives the first one's failure.
    assert_eq!(program.to_string(), "let y = 10;");
}

#[test]
fn test_recovery_collects_one_diagnostic_per_fault() {
    let (program, diagnostics) = parse_source("let = 1; 5 + ; let x 2; let y = 3;");

    assert_eq!(diagnostics.len(), 3);
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::MalformedStatement { .. }
    ));
    assert!(matches!(
        diagnostics[1].kind(),
        DiagnosticKind::MissingPrefixRule { .. }
    ));
    assert!(matches!(
        diagnostics[2].kind(),
        DiagnosticKind::UnexpectedToken {
            expected: TokenKind::Assign,
            ..
        }
    ));
    assert_eq!(program.to_string(), "let y = 3;");
}

#[test]
fn test_missing_operand_after_operator() {
    let (_, diagnostics) = parse_source("5 + ;");

    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::MissingPrefixRule {
            kind: TokenKind::Semicolon,
            ..
        }
    ));
}

#[test]
fn test_stray_closing_brace_does_not_stall() {
    let (program, diagnostics) = parse_source("} let x = 1;");

    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::MissingPrefixRule {
            kind: TokenKind::RBrace,
            ..
        }
    ));
    assert_eq!(program.to_string(), "let x = 1;");
}

#[test]
fn test_unterminated_block_reports_eof() {
    let (_, diagnostics) = parse_source("if x { let y = 1;");

    assert!(diagnostics.iter().any(|diagnostic| matches!(
        diagnostic.kind(),
        DiagnosticKind::UnexpectedToken {
            expected: TokenKind::RBrace,
            found: TokenKind::Eof,
        }
    )));
}

#[test]
fn test_recovery_inside_block() {
    // The failed statement inside the block must not eat the closing brace.
    let (program, diagnostics) = parse_source("if x { 5 + } let y = 1;");

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.statements[1].to_string(), "let y = 1;");
}

#[test]
fn test_diagnostic_positions() {
    let (_, diagnostics) = parse_source("let x 5;");

    assert_eq!(diagnostics.len(), 1);
    let position = diagnostics[0].position();
    assert_eq!(position.line, 1);
    assert_eq!(position.column, 7);
}

#[test]
fn test_empty_program() {
    let (program, diagnostics) = parse_source("");

    assert!(program.statements.is_empty());
    assert!(diagnostics.is_empty());
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_nesting_depth_limit() {
    let mut parser = Parser::with_max_depth(tokenize("((((1))))"), 3);
    create_token_lookups(&mut parser);

    let program = parser.parse_program();
    let diagnostics = parser.take_diagnostics();

    assert!(program.statements.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        diagnostics[0].kind(),
        DiagnosticKind::NestingTooDeep { limit: 3 }
    ));
}

#[test]
fn test_nesting_within_limit() {
    let parsed = parse_clean("((((1))))");
    assert_eq!(parsed.to_string(), "1");
}
