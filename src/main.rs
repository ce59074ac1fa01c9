use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use formula::{error::PositionedError, parse_formula};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// formula evaluates an arithmetic expression and prints the result, or
/// points at the character that makes it invalid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells formula to read the first line of a file instead of taking the
    /// formula as an argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed expression tree before the result.
    #[arg(short, long)]
    tree: bool,

    /// The formula, or a path when `--file` is given. A single line is read
    /// from standard input when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let formula = match read_formula(&args) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("Failed to read the formula: {e}");
            return ExitCode::FAILURE;
        },
    };
    debug!(%formula, "read formula");

    let expr = match parse_formula(&formula) {
        Ok(expr) => expr,
        Err(e) => return report(&formula, &e),
    };

    if args.tree {
        println!("{expr:#?}");
    }

    println!("{}", expr.evaluate());
    ExitCode::SUCCESS
}

fn read_formula(args: &Args) -> io::Result<String> {
    let line = match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path)?.lines()
                                                       .next()
                                                       .unwrap_or_default()
                                                       .to_string(),
        (Some(formula), false) => formula.clone(),
        (None, _) => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        },
    };

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Prints the formula with a caret under the offending character.
fn report(formula: &str, error: &PositionedError) -> ExitCode {
    eprintln!("Invalid input:");
    eprintln!("\"{formula}\"");
    eprintln!("{}^", " ".repeat(error.position() + 1));
    eprintln!("{error}");
    ExitCode::FAILURE
}
