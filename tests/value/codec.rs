//! Integration tests for the binary-identifier codec

use ferrodoc_value::{BinId, Error, InvalidBinIdError};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_zeros_yields_twelve_zero_bytes() {
    let id = BinId::parse(&"0".repeat(24)).unwrap();
    assert_eq!(id.as_bytes(), &[0u8; 12]);
}

#[test]
fn parse_failures_carry_input() {
    let cases = [
        String::new(),
        "xyz".to_string(),
        "a".repeat(23),
        "a".repeat(25),
    ];
    for input in cases {
        let err = BinId::parse(&input).unwrap_err();
        assert_eq!(err, InvalidBinIdError::new(input.clone()));
    }
}

#[test]
fn from_str_matches_parse() {
    let s = "5f2b3c4d5e6f708192a3b4c5";
    assert_eq!(s.parse::<BinId>().unwrap(), BinId::parse(s).unwrap());
}

// =============================================================================
// Printing
// =============================================================================

#[test]
fn print_round_trips_lowercased() {
    for s in [
        "000000000000000000000000",
        "ffffffffffffffffffffffff",
        "0123456789ABCDEFabcdef01",
    ] {
        assert_eq!(BinId::parse(s).unwrap().to_hex(), s.to_lowercase());
    }
}

#[test]
fn bytes_round_trip_through_text() {
    let id = BinId::from_bytes([0xde, 0xad, 0xbe, 0xef, 0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(id.to_string(), "deadbeef0001020304050607");
    assert_eq!(BinId::parse(&id.to_string()).unwrap(), id);
}

#[test]
fn errors_lift_into_umbrella_error() {
    fn parse_any(s: &str) -> ferrodoc_value::Result<BinId> {
        Ok(BinId::parse(s)?)
    }
    assert!(matches!(parse_any("nope"), Err(Error::InvalidBinId(_))));
}
