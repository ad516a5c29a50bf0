//! Ordex CLI
//!
//! Compile patterns over a discovered symbol alphabet and run them.

use std::io::{self, Write};

use ordex_engine::MatchMode;
use ordex_lexer::LexMode;
use ordexc::commands::{
    classify, dump, explain, run_match, symbolize, tokenize, CommandError, MatchOptions,
};

fn main() {
    ordexc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let command = &args[1];

    let result = match command.as_str() {
        "dump" => {
            let mut mode = LexMode::Char;
            let mut pattern = None;
            for arg in args.iter().skip(2) {
                if arg == "--symbol" || arg == "-s" {
                    mode = LexMode::Symbol;
                } else if pattern.is_none() {
                    pattern = Some(arg.as_str());
                }
            }
            let Some(pattern) = pattern else {
                eprintln!("Usage: ordex dump [--symbol] <pattern>");
                std::process::exit(1);
            };
            dump(pattern, mode, &mut out)
        }
        "match" => {
            let mut options = MatchOptions::default();
            let mut patterns = Vec::new();
            let mut input = None;
            let mut rest = args.iter().skip(2);
            while let Some(arg) = rest.next() {
                match arg.as_str() {
                    "--symbol" | "-s" => options.mode = LexMode::Symbol,
                    "--exact" | "-e" => options.match_mode = MatchMode::Exact,
                    "--" => {
                        input = Some(rest.cloned().collect::<Vec<_>>().join(" "));
                        break;
                    }
                    _ => patterns.push(arg.clone()),
                }
            }
            let Some(input) = input.filter(|_| !patterns.is_empty()) else {
                eprintln!("Usage: ordex match [--symbol] [--exact] <pattern>... -- <input>");
                std::process::exit(1);
            };
            run_match(&patterns, &input, options, &mut out)
        }
        "tokenize" | "symbolize" | "classify" => {
            let Some(config) = args.get(2) else {
                eprintln!("Usage: ordex {command} <config.json>");
                eprintln!();
                eprintln!("Reads one record per line from stdin.");
                std::process::exit(1);
            };
            let stdin = io::stdin();
            let mut input = stdin.lock();
            match command.as_str() {
                "tokenize" => tokenize(config, &mut input, &mut out),
                "symbolize" => symbolize(config, &mut input, &mut out),
                _ => classify(config, &mut input, &mut out),
            }
        }
        "--explain" | "explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: ordex --explain <ERROR_CODE>");
                eprintln!("Example: ordex --explain E1004");
                std::process::exit(1);
            };
            explain(code, &mut out)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("ordex {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result.and_then(|()| out.flush().map_err(CommandError::from)) {
        eprintln!("{}", err.report());
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("ordex: regular expressions over a discovered symbol alphabet");
    println!();
    println!("Usage: ordex <command> [options]");
    println!();
    println!("Commands:");
    println!("  dump [--symbol] <pattern>          Show the parsed tree and its NFA");
    println!("  match [--symbol] [--exact] <pattern>... -- <input>");
    println!("                                     Match input against the patterns");
    println!("  tokenize <config.json>             Tokenize stdin, one record per line");
    println!("  symbolize <config.json>            Map whitespace-separated tokens to symbols");
    println!("  classify <config.json>             Classify whitespace-separated symbols");
    println!("  --explain <code>                   Explain an error code (e.g., E1004)");
    println!("  help                               Show this help message");
    println!("  version                            Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=ordex_engine=debug) for a trace of each phase.");
}
