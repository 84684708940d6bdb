//! Command-line interface for brak
//! This binary annotates bracket sources and demonstrates the incremental
//! edit path.
//!
//! Usage:
//!   brak tokens `<path>` [--format `<format>`]  - Print the annotated token sequence
//!   brak fix `<path>`                         - Print the balanced source
//!   brak insert `<path>` --index `<n>`          - Insert `{` and show the transitions

use clap::{Arg, Command};

use brak::{annotate, balanced_source, EditState, SourceTransition, Token, TokenTransition};

fn main() {
    let matches = Command::new("brak")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting balanced bracket token sequences")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the annotated token sequence for a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the bracket source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("fix")
                .about("Print the balanced source (synthetic closers materialized)")
                .arg(
                    Arg::new("path")
                        .help("Path to the bracket source file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("insert")
                .about("Insert an opening curly brace and show the token transitions")
                .arg(
                    Arg::new("path")
                        .help("Path to the bracket source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("index")
                        .long("index")
                        .short('i')
                        .help("Source offset to insert at")
                        .required(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        Some(("fix", fix_matches)) => {
            let path = fix_matches.get_one::<String>("path").unwrap();
            handle_fix_command(path);
        }
        Some(("insert", insert_matches)) => {
            let path = insert_matches.get_one::<String>("path").unwrap();
            let index = insert_matches.get_one::<String>("index").unwrap();
            handle_insert_command(path, index);
        }
        _ => unreachable!(),
    }
}

/// Read a source file, trimming the trailing newline editors add
fn read_source(path: &str) -> String {
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });
    content.trim_end_matches('\n').to_string()
}

fn print_token_lines(tokens: &[Token]) {
    for token in tokens {
        let text = if token.source.is_empty() {
            "-"
        } else {
            token.source.as_str()
        };
        println!("{} {} {}", text, token.kind, token.origin);
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let source = read_source(path);
    let tokens = annotate(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match format {
        "text" => print_token_lines(&tokens),
        "json" => {
            let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Unknown format '{}', expected 'text' or 'json'", other);
            std::process::exit(1);
        }
    }
}

/// Handle the fix command
fn handle_fix_command(path: &str) {
    let source = read_source(path);
    let tokens = annotate(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    println!("{}", balanced_source(&tokens));
}

/// Handle the insert command
fn handle_insert_command(path: &str, index: &str) {
    let index: usize = index.parse().unwrap_or_else(|e| {
        eprintln!("Invalid index: {}", e);
        std::process::exit(1);
    });

    let source = read_source(path);
    if index > source.len() {
        eprintln!("Index {} is past the end of the source ({})", index, source.len());
        std::process::exit(1);
    }

    let state = EditState::from_source(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let transition = SourceTransition {
        index,
        character: '{',
    };
    let transitions = brak::generate_transitions(&state, &transition);
    let next = state.edit(&transition);

    for transition in &transitions {
        match transition {
            TokenTransition::Insert(at, token) => {
                println!("insert {} {} {}", at, token.kind, token.origin)
            }
            TokenTransition::ChangeOrigin(at, origin) => {
                println!("change-origin {} {}", at, origin)
            }
        }
    }
    println!();
    print_token_lines(next.tokens());
}
