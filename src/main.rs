use std::{env, fs::read_to_string, process::exit, time::Instant};

use helios::{display_diagnostic, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: helios <file>");
        exit(2);
    }

    let file_path = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("failed to read {}: {}", file_path, error);
            exit(2);
        }
    };

    let start = Instant::now();
    let tokens = tokenize(&source);
    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (program, diagnostics) = parse(tokens);
    println!("Parsed in {:?}", parse_start.elapsed());

    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            display_diagnostic(diagnostic, &source, file_path);
        }
        exit(1);
    }

    println!("{}", program);
}
