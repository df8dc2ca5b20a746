//! Command-line parsing and validation.

use crate::error::CliError;
use std::str::FromStr;

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format '{}': expected human, csv or json",
                s
            )),
        }
    }
}

#[derive(Debug)]
pub struct Invocation {
    /// A coordinate expression, or `@file` / `@-` for line input.
    pub input: String,
    pub format: OutputFormat,
    pub headers: bool,
}

pub fn parse_cli(args: Vec<String>) -> CliResult<Invocation> {
    let mut input: Option<String> = None;
    let mut format = OutputFormat::Human;
    let mut headers = true;

    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(CliError::Exit(help_text())),
            "-V" | "--version" => {
                return Err(CliError::Exit(format!(
                    "dms2dd {}",
                    env!("CARGO_PKG_VERSION")
                )));
            }
            "--headers" => headers = true,
            "--no-headers" => headers = false,
            "--format" => {
                let value = iter
                    .next()
                    .ok_or("Option '--format' requires a value")?;
                format = value.parse::<OutputFormat>().map_err(CliError::from)?;
            }
            _ if arg.starts_with("--format=") => {
                let value = &arg["--format=".len()..];
                format = value.parse::<OutputFormat>().map_err(CliError::from)?;
            }
            _ if arg.starts_with("--") => {
                return Err(CliError::Message(format!("Unknown option '{}'", arg)));
            }
            _ => {
                if input.is_some() {
                    return Err(CliError::Message(format!(
                        "Unexpected extra argument '{}' (quote the coordinate expression)",
                        arg
                    )));
                }
                input = Some(arg);
            }
        }
    }

    let input = input.ok_or_else(|| CliError::Message(usage_line()))?;

    Ok(Invocation {
        input,
        format,
        headers,
    })
}

fn usage_line() -> String {
    "Usage: dms2dd [OPTIONS] <COORDINATES | @FILE | @->".to_string()
}

fn help_text() -> String {
    format!(
        "dms2dd {} - convert DMS coordinate strings to decimal degrees\n\
         \n\
         {}\n\
         \n\
         Arguments:\n\
         \x20 <COORDINATES>  Coordinate expression, e.g. \"59°12'7.7\\\"N 02°15'39.6\\\"W\".\n\
         \x20                Use @FILE to read one expression per line, @- for stdin.\n\
         \n\
         Options:\n\
         \x20     --format=<FORMAT>  Output format: human, csv or json [default: human]\n\
         \x20     --headers          Print a CSV header row (default)\n\
         \x20     --no-headers       Suppress the CSV header row\n\
         \x20 -h, --help             Show this help\n\
         \x20 -V, --version          Show version",
        env!("CARGO_PKG_VERSION"),
        usage_line()
    )
}
