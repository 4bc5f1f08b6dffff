use crate::JsonParseErrorKind;
use crate::scan;

/// Verifies that boolean consumes exactly `true` (4 bytes) or `false`
/// (5 bytes), ignoring whatever follows.
#[test]
fn boolean_matches_both_literals() {
    assert_eq!(scan::boolean(b"true").unwrap(), 4);
    assert_eq!(scan::boolean(b"false").unwrap(), 5);
    assert_eq!(scan::boolean(b"true,").unwrap(), 4);
}

/// Verifies that boolean matching is case-sensitive with no partial
/// matches.
#[test]
fn boolean_rejects_near_misses() {
    for input in [&b"True"[..], b"TRUE", b"tru", b"fals", b"truthy"] {
        let error = scan::boolean(input).unwrap_err();
        assert_eq!(error.kind, JsonParseErrorKind::InvalidBoolean, "{input:?}");
    }
}

/// Verifies that boolean distinguishes empty input from a wrong literal.
#[test]
fn boolean_empty_input() {
    assert_eq!(
        scan::boolean(b"").unwrap_err().kind,
        JsonParseErrorKind::NothingToParse,
    );
}

/// Verifies that null consumes exactly the 4-byte literal.
#[test]
fn null_matches_literal() {
    assert_eq!(scan::null(b"null").unwrap(), 4);
    assert_eq!(scan::null(b"null}").unwrap(), 4);
}

/// Verifies that null rejects case variants and truncations.
#[test]
fn null_rejects_near_misses() {
    for input in [&b"Null"[..], b"NULL", b"nul", b"nil"] {
        let error = scan::null(input).unwrap_err();
        assert_eq!(error.kind, JsonParseErrorKind::InvalidNull, "{input:?}");
    }
    assert_eq!(
        scan::null(b"").unwrap_err().kind,
        JsonParseErrorKind::NothingToParse,
    );
}
