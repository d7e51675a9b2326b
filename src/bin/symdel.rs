//! CLI front-end for the symdel engine.
//!
//! Reads one or two newline-delimited files of ASCII strings, runs
//! within-set or cross-set symdel, and writes `(i, j, d)` triplets as
//! tab-separated values on stdout.

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "symdel", about = "Find pairs of similar strings by bounded Levenshtein distance")]
struct Args {
    /// Newline-delimited file of query strings.
    #[arg(long = "query")]
    query: String,

    /// Newline-delimited file of reference strings. If omitted, searches for
    /// neighbours within the query set.
    #[arg(long = "reference")]
    reference: Option<String>,

    /// Maximum Levenshtein distance at which strings are considered neighbours.
    #[arg(short = 'k', long = "max-distance", default_value_t = 1)]
    max_distance: u8,

    /// Report indices starting from 1 instead of 0.
    #[arg(long = "one-indexed")]
    one_indexed: bool,
}

fn read_lines(path: &str) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let query = match read_lines(&args.query) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("symdel: failed to read {}: {}", args.query, e);
            return ExitCode::FAILURE;
        }
    };

    let zero_index = !args.one_indexed;

    let result = match &args.reference {
        Some(path) => {
            let reference = match read_lines(path) {
                Ok(lines) => lines,
                Err(e) => {
                    eprintln!("symdel: failed to read {}: {}", path, e);
                    return ExitCode::FAILURE;
                }
            };
            symdel::symdel_cross(query, reference, args.max_distance, zero_index)
        }
        None => symdel::symdel_within(query, args.max_distance, zero_index),
    };

    let matches = match result {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("symdel: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for m in matches {
        if writeln!(handle, "{}\t{}\t{}", m.i, m.j, m.distance).is_err() {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
