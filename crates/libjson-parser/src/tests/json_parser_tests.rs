//! Tests for the JsonParser entry point: prefix matching, the depth and
//! trailing-bytes configuration, and absolute error positioning.

use crate::JsonParseErrorKind;
use crate::JsonParser;
use crate::JsonType;

// =============================================================================
// Basic parsing
// =============================================================================

/// Verifies that a complete document parses and reports its category and
/// consumed length.
#[test]
fn parse_complete_document() {
    let element = JsonParser::new(r#"{"a": 1}"#).parse().unwrap();
    assert_eq!(element.value().json_type(), JsonType::Object);
    assert_eq!(element.consumed_len(), 8);
}

/// Verifies that the element span includes surrounding whitespace while
/// the value span inside it does not.
#[test]
fn parse_whitespace_spans() {
    let element = JsonParser::new("  [1, 2]  ").parse().unwrap();
    assert_eq!(element.consumed_len(), 10);
    assert_eq!(element.span().offset(), 0);
    assert_eq!(element.value().span().offset(), 2);
    assert_eq!(element.value().as_bytes(), b"[1, 2]");
}

/// Verifies that every scalar category parses at the top level; the
/// grammar does not restrict documents to containers.
#[test]
fn parse_top_level_scalars() {
    let cases: [(&str, JsonType); 5] = [
        ("42", JsonType::Number),
        (r#""hi""#, JsonType::String),
        ("true", JsonType::Boolean),
        ("false", JsonType::Boolean),
        ("null", JsonType::Null),
    ];
    for (input, expected) in cases {
        let element = JsonParser::new(input).parse().unwrap();
        assert_eq!(element.value().json_type(), expected, "{input}");
        assert_eq!(element.consumed_len(), input.len(), "{input}");
    }
}

/// Verifies that the parser accepts both `&str` and `&[u8]` sources.
#[test]
fn parse_accepts_str_and_bytes() {
    assert!(JsonParser::new("null").parse().is_ok());
    assert!(JsonParser::new(b"null".as_slice()).parse().is_ok());
    let owned = String::from("[1]");
    assert!(JsonParser::new(&owned).parse().is_ok());
}

/// Verifies a whole-document scenario: mixed nesting with surrounding
/// whitespace consumes the entire input and classifies as an object.
#[test]
fn parse_whole_document() {
    let input = b"  { \"a\": [1, 2.5e1, true, null] }  ";
    let element = JsonParser::new(input.as_slice()).parse().unwrap();
    assert_eq!(element.consumed_len(), input.len());
    assert_eq!(element.value().json_type(), JsonType::Object);
}

/// Verifies span-boundary idempotence: the consumed length never exceeds
/// the buffer, and re-parsing exactly the consumed sub-slice in
/// isolation succeeds with the same consumed length.
#[test]
fn parse_consumed_prefix_is_idempotent() {
    let inputs: [&[u8]; 4] = [
        b"  {\"a\": [1, 2]}  tail",
        b"1 trailing",
        b"\"str\"]",
        b"[true, null] ,",
    ];
    for input in inputs {
        let element = JsonParser::new(input).parse().unwrap();
        let consumed = element.consumed_len();
        assert!(consumed <= input.len());

        let reparsed = JsonParser::new(&input[..consumed]).parse().unwrap();
        assert_eq!(reparsed.consumed_len(), consumed, "{input:?}");
    }
}

// =============================================================================
// Prefix matching and trailing bytes
// =============================================================================

/// Verifies the default prefix behavior: a valid element followed by
/// garbage parses successfully, consuming only the element (and the
/// whitespace after it).
#[test]
fn parse_ignores_trailing_bytes_by_default() {
    let element = JsonParser::new("1 trailing").parse().unwrap();
    assert_eq!(element.consumed_len(), 2);
    assert_eq!(element.value().as_bytes(), b"1");

    let element = JsonParser::new("[1,2]xyz").parse().unwrap();
    assert_eq!(element.consumed_len(), 5);
}

/// Verifies that reject_trailing_bytes() turns unconsumed input into an
/// error carrying the prefix length, positioned at the first unconsumed
/// byte.
#[test]
fn parse_reject_trailing_bytes() {
    let error = JsonParser::new("[1,2]xyz")
        .reject_trailing_bytes()
        .parse()
        .unwrap_err();
    assert_eq!(
        *error.kind(),
        JsonParseErrorKind::UnconsumedTrailingBytes { consumed: 5 },
    );
    assert_eq!(error.offset(), 5);
}

/// Verifies that trailing whitespace does not count as trailing bytes; it
/// belongs to the element.
#[test]
fn parse_strict_allows_trailing_whitespace() {
    let element = JsonParser::new("1 \n")
        .reject_trailing_bytes()
        .parse()
        .unwrap();
    assert_eq!(element.consumed_len(), 3);
}

// =============================================================================
// Depth configuration
// =============================================================================

/// Verifies that with_max_depth() bounds nesting: each container level
/// and the innermost scalar each cost one unit.
#[test]
fn parse_with_max_depth() {
    assert!(JsonParser::new("[1]").with_max_depth(2).parse().is_ok());
    let error = JsonParser::new("[[1]]")
        .with_max_depth(2)
        .parse()
        .unwrap_err();
    assert_eq!(*error.kind(), JsonParseErrorKind::NestingTooDeep);
}

/// Verifies that the default budget accepts deep-but-reasonable nesting
/// and rejects a bracket bomb.
#[test]
fn parse_default_depth() {
    let nested = format!("{}1{}", "[".repeat(100), "]".repeat(100));
    assert!(JsonParser::new(&nested).parse().is_ok());

    let bomb = "[".repeat(10_000);
    let error = JsonParser::new(&bomb).parse().unwrap_err();
    assert_eq!(*error.kind(), JsonParseErrorKind::NestingTooDeep);
}

// =============================================================================
// Error positioning
// =============================================================================

/// Verifies that empty and whitespace-only inputs fail with
/// NothingToParse at the position where a value was expected.
#[test]
fn parse_empty_inputs() {
    let error = JsonParser::new("").parse().unwrap_err();
    assert_eq!(*error.kind(), JsonParseErrorKind::NothingToParse);
    assert_eq!(error.offset(), 0);

    let error = JsonParser::new("   ").parse().unwrap_err();
    assert_eq!(*error.kind(), JsonParseErrorKind::NothingToParse);
    assert_eq!(error.offset(), 3);
}

/// Verifies that errors from deep inside the scan arrive with absolute
/// byte offsets, fully rebased through every recursion level.
#[test]
fn parse_error_offsets_are_absolute() {
    let error = JsonParser::new(r#"{"a": }"#).parse().unwrap_err();
    assert_eq!(*error.kind(), JsonParseErrorKind::Unsupported { found: b'}' });
    assert_eq!(error.offset(), 6);

    let error = JsonParser::new(r#"  {"a": [x, 1]}"#).parse().unwrap_err();
    assert_eq!(*error.kind(), JsonParseErrorKind::Unsupported { found: b'x' });
    assert_eq!(error.offset(), 9);
}

/// Verifies that a bad element after a comma does not propagate its own
/// error: the lenient list policy stops the interior at the last good
/// element and the failure surfaces as a missing close bracket at the
/// comma.
#[test]
fn parse_lenient_list_error_surfaces_at_comma() {
    let error = JsonParser::new(r#"[1, {"b": x}]"#).parse().unwrap_err();
    assert_eq!(*error.kind(), JsonParseErrorKind::InvalidArrayClose);
    assert_eq!(error.offset(), 2);
}

/// Verifies that scanner notes survive into the public error, with their
/// offsets rebased along with the error's own.
#[test]
fn parse_error_notes_rebased() {
    let error = JsonParser::new("  [1").parse().unwrap_err();
    assert_eq!(*error.kind(), JsonParseErrorKind::InvalidArrayClose);
    assert_eq!(error.offset(), 4);
    assert_eq!(error.notes()[0].message, "array opened here");
    assert_eq!(error.notes()[0].offset, Some(2));
}
