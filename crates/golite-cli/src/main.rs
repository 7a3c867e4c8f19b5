use clap::{Parser, ValueEnum};
use golite_lexer::{Scanner, StderrSink, Token};
use std::path::Path;

#[derive(Parser)]
#[command(name = "golite")]
#[command(about = "golite — lexical analyser for the golite language")]
#[command(version)]
struct Cli {
    /// Input source file
    path: String,

    /// Output format for the token stream
    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Fixed-width columns, one token per row
    Table,
    /// JSON array of token objects
    Json,
}

fn main() {
    let cli = Cli::parse();
    let source = read_source(&cli.path);

    // Lexical diagnostics stream to stderr as they are detected; the token
    // listing on stdout stays clean.
    let mut sink = StderrSink;
    let tokens = Scanner::with_sink(&source, &mut sink).scan();

    match cli.format {
        Format::Table => print_table(&tokens),
        Format::Json => print_json(&tokens),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn print_table(tokens: &[Token]) {
    println!(
        "{:<15} {:<20} {:<12} {:<12}",
        "Token Type", "Token Value", "Line Number", "Column Number"
    );
    for token in tokens {
        println!(
            "{:<15} {:<20} {:<12} {:<12}",
            token.kind, token.value, token.line, token.column
        );
    }
}

fn print_json(tokens: &[Token]) {
    match serde_json::to_string_pretty(tokens) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing tokens: {e}");
            std::process::exit(1);
        }
    }
}
