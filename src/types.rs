use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("could not parse coordinate: {0}")]
    Unparsable(String),
    #[error("degrees out of range: {0} (expected 0 to 180)")]
    DegreesOutOfRange(f64),
    #[error("minutes out of range: {0} (expected 0 to 60)")]
    MinutesOutOfRange(f64),
    #[error("seconds out of range: {0} (expected 0 to 60)")]
    SecondsOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Lat,
    Lon,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::Lat => Axis::Lon,
            Axis::Lon => Axis::Lat,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Lat => write!(f, "lat"),
            Axis::Lon => write!(f, "lon"),
        }
    }
}

/// Outcome of parsing a coordinate expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    /// A single value with no hemisphere information.
    Decimal(f64),
    /// A single value whose hemisphere letter fixes its axis.
    Single { axis: Axis, value: f64 },
    /// A full latitude/longitude pair.
    Pair { lat: f64, lon: f64 },
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Decimal(value) => write!(f, "{:.8}°", value),
            Coordinate::Single { axis, value } => write!(f, "{} {:.8}°", axis, value),
            Coordinate::Pair { lat, lon } => {
                write!(f, "lat {:.8}° lon {:.8}°", lat, lon)
            }
        }
    }
}
