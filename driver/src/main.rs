#![deny(rust_2018_idioms)]
use std::{fs::File, io::Read, path::PathBuf};

use clap::Parser;
use colored::Colorize;
use lex::{Lexer, TokenKind};

#[derive(Parser, Debug)]
#[command(name = "c-lex")]
#[command(about = "Scans a C source file and prints its token stream, one token per line.", long_about = None)]
#[command(author, version)] // Read from `Cargo.toml`
struct Cli {
    // Stop at the first illegal token instead of scanning the rest
    #[arg(long = "fail-fast", default_value_t = false)]
    fail_fast: bool,

    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let input_path: PathBuf = cli.input;

    let input_file = File::open(input_path.clone());
    if input_file.is_err() {
        println!("{} invalid input file {:?}", "error:".red(), input_path);
        return;
    }
    let mut input_file = input_file.unwrap();

    let mut input_stream = String::new();
    if input_file.read_to_string(&mut input_stream).is_err() {
        println!("{} unable to read {:?}", "error:".red(), input_path);
        return;
    }

    let mut lexer = Lexer::new(&input_stream);

    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::EOF => break,
            TokenKind::Illegal => {
                println!("{} {}", "error:".red(), token.literal);
                if cli.fail_fast {
                    return;
                }
            }
            _ => println!("{token}"),
        }
    }
}
