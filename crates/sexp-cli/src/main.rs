//! `json2sexp` CLI — convert a JSON document to S-expression text.
//!
//! ## Usage
//!
//! ```sh
//! # Convert JSON to an S-expression (stdin → stdout)
//! echo '{"x": 1, "y": [2, 3]}' | json2sexp
//! # => #((x . 1) (y . (2 3)))
//!
//! # Convert from file to file
//! json2sexp -i data.json -o data.sexp
//! ```
//!
//! Reads exactly one JSON document, writes its rendering followed by a
//! single newline. Malformed input exits non-zero with a diagnostic on
//! stderr and produces no output.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "json2sexp",
    version,
    about = "Convert JSON documents to Lisp S-expressions"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let json = read_input(cli.input.as_deref())?;
    let sexp = sexp_core::convert(&json).context("Failed to convert JSON to S-expression")?;
    write_output(cli.output.as_deref(), &sexp)?;

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Write the rendered text terminated by exactly one newline.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
