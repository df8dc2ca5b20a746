//! DMS-to-decimal-degrees converter CLI - entry point.

mod cli;
mod error;
mod output;

use cli::{Invocation, OutputFormat};
use dms2dd::coordinate_parser;
use dms2dd::file_input;
use error::{CliError, OutputError};
use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match cli::parse_cli(args) {
        Ok(invocation) => {
            if let Err(err) = run(&invocation) {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
        Err(CliError::Exit(msg)) => {
            println!("{}", msg);
            std::process::exit(0);
        }
        Err(CliError::Message(msg)) => {
            eprintln!("Error: {}", msg);
            std::process::exit(1);
        }
    }
}

fn run(invocation: &Invocation) -> Result<(), OutputError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if invocation.format == OutputFormat::Csv && invocation.headers {
        output::write_csv_header(&mut out)?;
    }

    if invocation.input.starts_with('@') {
        let reader = file_input::create_file_reader(&invocation.input)
            .map_err(|e| OutputError(format!("cannot open {}: {}", invocation.input, e)))?;
        for (index, line) in file_input::coordinate_lines(reader).enumerate() {
            let line = line?;
            let coordinate = coordinate_parser::parse(&line)
                .map_err(|e| OutputError(format!("line {}: {}", index + 1, e)))?;
            output::write_result(&mut out, &coordinate, invocation.format)?;
        }
    } else {
        let coordinate =
            coordinate_parser::parse(&invocation.input).map_err(|e| OutputError(e.to_string()))?;
        output::write_result(&mut out, &coordinate, invocation.format)?;
    }

    out.flush()?;
    Ok(())
}
