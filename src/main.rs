use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
};

use calc::{evaluate, tokenize};
use clap::Parser;
use log::LevelFilter;

/// calc evaluates arithmetic expressions made of integers and `+ - * /`.
///
/// Without an expression it starts an interactive prompt that evaluates one
/// line at a time until the input ends.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calc to read expressions, one per line, from a file.
    #[arg(short, long)]
    file: bool,

    /// Prints the tokens of each expression instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// Logs every token and intermediate result.
    #[arg(short, long)]
    verbose: bool,

    /// An expression, or a file path when `--file` is given.
    contents: Option<String>,
}

/// Evaluates one line and prints the result or the error.
///
/// Returns `false` if the line failed.
fn run_line(line: &str, tokens: bool) -> bool {
    if tokens {
        return match tokenize(line) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{token}");
                }
                true
            },
            Err(e) => {
                println!("{e}");
                false
            },
        };
    }

    match evaluate(line) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            println!("{e}");
            false
        },
    }
}

fn repl(tokens: bool) -> io::Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();

    loop {
        if interactive {
            write!(stdout, "calc> ")?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        run_line(&line, tokens);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Trace);
    }
    logger.init();

    match args.contents {
        None => {
            if let Err(e) = repl(args.tokens) {
                eprintln!("Failed to read input: {e}");
                std::process::exit(1);
            }
        },
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            let mut ok = true;
            for line in script.lines().filter(|line| !line.trim().is_empty()) {
                ok &= run_line(line, args.tokens);
            }
            if !ok {
                std::process::exit(1);
            }
        },
        Some(expression) => {
            if !run_line(&expression, args.tokens) {
                std::process::exit(1);
            }
        },
    }
}
