use dms2dd::coordinate_parser::parse;
use dms2dd::types::{Axis, Coordinate, ParseError};

const EPS: f64 = 1e-6;

fn assert_pair(input: &str, expected_lat: f64, expected_lon: f64) {
    match parse(input).unwrap() {
        Coordinate::Pair { lat, lon } => {
            assert!(
                (lat - expected_lat).abs() < EPS,
                "lat {lat} != {expected_lat} for {input:?}"
            );
            assert!(
                (lon - expected_lon).abs() < EPS,
                "lon {lon} != {expected_lon} for {input:?}"
            );
        }
        other => panic!("expected pair for {input:?}, got {other:?}"),
    }
}

#[test]
fn lone_tagged_coordinate_keeps_its_axis() {
    match parse("21° 25' 38.57\"N").unwrap() {
        Coordinate::Single { axis, value } => {
            assert_eq!(axis, Axis::Lat);
            assert!((value - 21.42738056).abs() < EPS);
        }
        other => panic!("expected single lat, got {other:?}"),
    }
}

#[test]
fn explicit_pair() {
    assert_pair("59°12'7.7\"N 02°15'39.6\"W", 59.20213889, -2.261);
}

#[test]
fn positional_inference_for_decimal_pair() {
    assert_pair("51.5, -0.126", 51.5, -0.126);
}

#[test]
fn lone_untagged_coordinate_is_a_bare_number() {
    match parse("59°12'7.7\"").unwrap() {
        Coordinate::Decimal(value) => assert!((value - 59.20213889).abs() < EPS),
        other => panic!("expected bare decimal, got {other:?}"),
    }
}

#[test]
fn degrees_out_of_range() {
    assert!(matches!(
        parse("200° N"),
        Err(ParseError::DegreesOutOfRange(_))
    ));
}

#[test]
fn unparsable_garbage() {
    assert!(matches!(
        parse("garbage text"),
        Err(ParseError::Unparsable(_))
    ));
}

#[test]
fn dms_round_trip() {
    let cases: [(u32, u32, f64, char); 6] = [
        (0, 0, 0.0, 'N'),
        (59, 12, 7.7, 'N'),
        (2, 15, 39.6, 'W'),
        (180, 0, 0.0, 'E'),
        (21, 25, 38.57, 'S'),
        (89, 59, 60.0, 'N'),
    ];

    for (deg, min, sec, letter) in cases {
        let formatted = format!("{}°{}'{}\"{}", deg, min, sec, letter);
        let sign = if letter == 'S' || letter == 'W' { -1.0 } else { 1.0 };
        let expected = sign * (deg as f64 + min as f64 / 60.0 + sec / 3600.0);
        let axis = if letter == 'N' || letter == 'S' {
            Axis::Lat
        } else {
            Axis::Lon
        };
        match parse(&formatted).unwrap() {
            Coordinate::Single { axis: got, value } => {
                assert_eq!(got, axis, "axis mismatch for {formatted:?}");
                assert!(
                    (value - expected).abs() < EPS,
                    "{formatted:?}: {value} != {expected}"
                );
            }
            other => panic!("expected single coordinate for {formatted:?}, got {other:?}"),
        }
    }
}

#[test]
fn dms_and_decimal_forms_agree() {
    // Same location, DMS and decimal renderings.
    let (dms_lat, dms_lon) = match parse("59°12'7.7\"N 02°15'39.6\"W").unwrap() {
        Coordinate::Pair { lat, lon } => (lat, lon),
        other => panic!("expected pair, got {other:?}"),
    };

    let rendered = format!("{:.10} {:.10}", dms_lat, dms_lon);
    assert_pair(&rendered, dms_lat, dms_lon);
}

#[test]
fn complementary_axis_inference() {
    // Second coordinate has no letter: it takes the axis the first one
    // did not use.
    assert_pair("02°15'39.6\"W 59°12'7.7\"", 59.20213889, -2.261);
    assert_pair("59°12'7.7\"N 02°15'39.6\"", 59.20213889, -2.261);
}
