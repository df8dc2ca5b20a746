//! Free-form coordinate parsing: DMS, degrees/decimal-minutes or decimal
//! degrees, with optional hemisphere letters, in a single expression or a
//! lat/lon pair.

use crate::types::{Axis, Coordinate, ParseError};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// One coordinate expression, anchored at the start of the (trimmed) input.
///
/// Accepts a hemisphere letter before or after the numeric part, an optional
/// minus sign, and the usual degree/minute/second glyph variants (`°`, `º`,
/// `d`, `:`, `'`, `’`, `‘`, `′`, `"`, `″`, doubled quotes). Separators
/// between fields are optional single whitespace.
const DMS_PATTERN: &str = r#"(?ix)
    ^
    (?P<head>[NSEW])?
    \s?
    (?P<sign>-)?
    (?P<deg>\d+(?:\.\d+)?)
    [°ºd:\s]?
    \s?
    (?:
        (?P<min>\d+(?:\.\d+)?)
        ['’‘′:]?
        \s?
        (?:
            (?P<sec>\d{1,2}(?:\.\d+)?)
            (?:"|″|''|’’)?
        )?
    )?
    \s?
    (?P<tail>[NSEW])?
"#;

static DMS_RE: OnceLock<Regex> = OnceLock::new();

fn dms_re() -> &'static Regex {
    DMS_RE.get_or_init(|| Regex::new(DMS_PATTERN).expect("DMS pattern must compile"))
}

/// One matched coordinate, reduced to a signed decimal value and an
/// optional axis from its hemisphere letter.
#[derive(Debug, Clone, Copy)]
struct Component {
    value: f64,
    axis: Option<Axis>,
}

/// Parse a coordinate expression into decimal degrees.
///
/// The input may hold one or two coordinates, separated by whitespace or a
/// comma. A lone coordinate without a hemisphere letter yields
/// [`Coordinate::Decimal`]; a lone lettered coordinate yields
/// [`Coordinate::Single`]; two coordinates yield [`Coordinate::Pair`], with
/// the first taken as latitude when no letters say otherwise.
pub fn parse(input: &str) -> Result<Coordinate, ParseError> {
    let text = input.trim();

    let first = dms_re()
        .captures(text)
        .ok_or_else(|| ParseError::Unparsable(text.to_string()))?;

    // A leading hemisphere letter makes the trailing capture ambiguous: the
    // pattern can swallow the letter that opens the next coordinate. Drop
    // the trailing capture and resume the scan at that letter.
    let head_present = first.name("head").is_some();
    let rest_start = if head_present {
        first.name("tail").map_or(match_end(&first), |t| t.start())
    } else {
        match_end(&first)
    };
    let c1 = component_from(&first, head_present)?;

    let rest = text[rest_start..]
        .trim_start()
        .trim_start_matches(',')
        .trim_start();
    let c2 = match dms_re().captures(rest) {
        Some(caps) => Some(component_from(&caps, false)?),
        None => None,
    };

    assemble(c1, c2, text)
}

fn match_end(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(0, |m| m.end())
}

fn component_from(caps: &Captures<'_>, ignore_tail: bool) -> Result<Component, ParseError> {
    let head = hemisphere(caps, "head");
    let tail = if ignore_tail {
        None
    } else {
        hemisphere(caps, "tail")
    };
    let letter = head.or(tail);

    let degrees = numeric_field(caps, "deg")?;
    let minutes = numeric_field(caps, "min")?;
    let seconds = numeric_field(caps, "sec")?;

    if !in_range(degrees, 0.0, 180.0) {
        return Err(ParseError::DegreesOutOfRange(degrees));
    }
    if !in_range(minutes, 0.0, 60.0) {
        return Err(ParseError::MinutesOutOfRange(minutes));
    }
    if !in_range(seconds, 0.0, 60.0) {
        return Err(ParseError::SecondsOutOfRange(seconds));
    }

    // Explicit minus wins over hemisphere letters; a leading letter wins
    // over a trailing one.
    let sign = if caps.name("sign").is_some() {
        -1.0
    } else {
        match letter {
            Some('S' | 'W') => -1.0,
            _ => 1.0,
        }
    };

    let axis = match letter {
        Some('N' | 'S') => Some(Axis::Lat),
        Some('E' | 'W') => Some(Axis::Lon),
        _ => None,
    };

    Ok(Component {
        value: sign * (degrees + minutes / 60.0 + seconds / 3600.0),
        axis,
    })
}

fn hemisphere(caps: &Captures<'_>, group: &str) -> Option<char> {
    caps.name(group)
        .and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase())
}

fn numeric_field(caps: &Captures<'_>, group: &str) -> Result<f64, ParseError> {
    match caps.name(group) {
        Some(m) => m
            .as_str()
            .parse::<f64>()
            .map_err(|_| ParseError::Unparsable(m.as_str().to_string())),
        None => Ok(0.0),
    }
}

/// Inclusive on both ends: 60' and 60" are accepted without rolling over,
/// matching the reference behavior.
fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

fn assemble(c1: Component, c2: Option<Component>, input: &str) -> Result<Coordinate, ParseError> {
    match (c1.axis, c2) {
        (None, None) => Ok(Coordinate::Decimal(c1.value)),
        // No letter on the first coordinate: positional convention, first
        // is latitude and second longitude, whatever the second carries.
        (None, Some(c2)) => Ok(Coordinate::Pair {
            lat: c1.value,
            lon: c2.value,
        }),
        (Some(axis), None) => Ok(Coordinate::Single {
            axis,
            value: c1.value,
        }),
        (Some(axis1), Some(c2)) => {
            let axis2 = c2.axis.unwrap_or(axis1.other());
            if axis2 == axis1 {
                return Err(ParseError::Unparsable(input.to_string()));
            }
            let (lat, lon) = match axis1 {
                Axis::Lat => (c1.value, c2.value),
                Axis::Lon => (c2.value, c1.value),
            };
            Ok(Coordinate::Pair { lat, lon })
        }
    }
}
