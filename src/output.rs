//! Result rendering: human, CSV and JSON.

use crate::cli::OutputFormat;
use crate::error::OutputError;
use dms2dd::types::{Axis, Coordinate};
use std::io::Write;

pub fn write_csv_header<W: Write>(out: &mut W) -> Result<(), OutputError> {
    writeln!(out, "lat,lon,decimal")?;
    Ok(())
}

pub fn write_result<W: Write>(
    out: &mut W,
    coordinate: &Coordinate,
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Human => writeln!(out, "{}", coordinate)?,
        OutputFormat::Csv => match coordinate {
            Coordinate::Pair { lat, lon } => writeln!(out, "{:.8},{:.8},", lat, lon)?,
            Coordinate::Single {
                axis: Axis::Lat,
                value,
            } => writeln!(out, "{:.8},,", value)?,
            Coordinate::Single {
                axis: Axis::Lon,
                value,
            } => writeln!(out, ",{:.8},", value)?,
            Coordinate::Decimal(value) => writeln!(out, ",,{:.8}", value)?,
        },
        OutputFormat::Json => match coordinate {
            Coordinate::Pair { lat, lon } => {
                writeln!(out, r#"{{"lat":{:.8},"lon":{:.8}}}"#, lat, lon)?
            }
            Coordinate::Single { axis, value } => {
                writeln!(out, r#"{{"{}":{:.8}}}"#, axis, value)?
            }
            Coordinate::Decimal(value) => writeln!(out, r#"{{"decimal":{:.8}}}"#, value)?,
        },
    }
    Ok(())
}
