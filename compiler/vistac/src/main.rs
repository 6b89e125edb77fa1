//! Vista CLI

use vistac::commands::{lex_file, parse_lex_options};

fn main() {
    vistac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => match parse_lex_options(&args[2..]) {
            Ok(options) => lex_file(&options),
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!("Usage: vista lex <file> [options]");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("vista {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Vista template lexer");
    println!();
    println!("Usage: vista <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a template and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --directive=OPEN,CLOSE    Directive delimiters (default: <% %>)");
    println!("  --sanitized=OPEN,CLOSE    Sanitized tag delimiters (default: {{{{ }}}})");
    println!("  --unsanitized=OPEN,CLOSE  Unsanitized tag delimiters (default: {{{{! !}}}})");
    println!("  --json                    Print tokens as JSON");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=vista_lexer=trace) for lexer tracing.");
}
