//! Property tests: generated inputs exercising the scanners against their
//! documented laws, cross-checked against serde_json where the two parsers
//! should agree.

use crate::JsonParser;
use crate::JsonType;
use crate::scan;
use proptest::prelude::*;

proptest! {
    /// Every i64, formatted in base 10, is a complete JSON number and
    /// converts back to the same value.
    #[test]
    fn any_i64_round_trips(n in any::<i64>()) {
        let text = n.to_string();
        let element = JsonParser::new(&text)
            .reject_trailing_bytes()
            .parse()
            .unwrap();
        prop_assert_eq!(element.value().json_type(), JsonType::Number);
        prop_assert_eq!(element.value().parse_i64().unwrap(), n);
    }

    /// Numerals assembled from the grammar's own parts (int, optional
    /// frac, optional exp) scan in full, and serde_json agrees they are
    /// valid JSON. The exponent is kept small enough that the value fits
    /// in an f64: serde_json rejects overflowing numerals (e.g. `18E307`)
    /// that the grammar itself accepts, so the cross-check only holds in
    /// the finite range.
    #[test]
    fn grammar_built_numerals_scan_fully(
        int in "-?(0|[1-9][0-9]{0,15})",
        frac in proptest::option::of("[.][0-9]{1,6}"),
        exp in proptest::option::of("[eE][+-]?[0-9]{1,2}"),
    ) {
        let text = format!(
            "{int}{}{}",
            frac.clone().unwrap_or_default(),
            exp.clone().unwrap_or_default(),
        );
        prop_assert_eq!(scan::number(text.as_bytes()).unwrap(), text.len());
        prop_assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());

        // The decomposition accounts for every byte of the numeral.
        let value = *JsonParser::new(&text).parse().unwrap().value();
        let total = value.int_span().unwrap().len()
            + value.frac_span().unwrap().len()
            + value.exp_span().unwrap().len();
        prop_assert_eq!(total, text.len());
    }

    /// Any printable string, encoded by serde_json, parses here as a
    /// complete string document. serde_json only needs `\"` and `\\`
    /// escapes for printable content, both inside the accepted escape
    /// set.
    #[test]
    fn serde_encoded_printable_strings_parse(s in "\\PC*") {
        let doc = serde_json::to_string(&s).unwrap();
        let element = JsonParser::new(&doc)
            .reject_trailing_bytes()
            .parse()
            .unwrap();
        prop_assert_eq!(element.value().json_type(), JsonType::String);
    }

    /// Integer arrays encoded by serde_json iterate back to the same
    /// values in the same order.
    #[test]
    fn integer_arrays_round_trip(
        items in proptest::collection::vec(any::<i64>(), 0..20),
    ) {
        let doc = serde_json::to_string(&items).unwrap();
        let element = JsonParser::new(&doc)
            .reject_trailing_bytes()
            .parse()
            .unwrap();
        let parsed: Vec<i64> = element
            .value()
            .elements()
            .unwrap()
            .map(|e| e.value().parse_i64().unwrap())
            .collect();
        prop_assert_eq!(parsed, items);
    }

    /// Appending bytes that cannot extend any value never changes how
    /// much of the prefix is consumed.
    #[test]
    fn trailing_garbage_preserves_prefix(
        items in proptest::collection::vec(any::<i64>(), 0..10),
        garbage in "#[ -~]{0,12}",
    ) {
        let doc = serde_json::to_string(&items).unwrap();
        let extended = format!("{doc}{garbage}");
        let element = JsonParser::new(&extended).parse().unwrap();
        prop_assert_eq!(element.consumed_len(), doc.len());
    }

    /// Objects built from generated keys iterate their members in
    /// document order with every key intact.
    #[test]
    fn object_members_round_trip(
        keys in proptest::collection::btree_set("[a-z]{1,8}", 0..10),
    ) {
        let body = keys
            .iter()
            .enumerate()
            .map(|(i, k)| format!(r#""{k}": {i}"#))
            .collect::<Vec<_>>()
            .join(", ");
        let doc = format!("{{{body}}}");
        let element = JsonParser::new(&doc)
            .reject_trailing_bytes()
            .parse()
            .unwrap();
        let parsed_keys: Vec<String> = element
            .value()
            .members()
            .unwrap()
            .map(|m| {
                String::from_utf8(m.key.string_bytes().unwrap().to_vec()).unwrap()
            })
            .collect();
        let expected: Vec<String> = keys.iter().cloned().collect();
        prop_assert_eq!(parsed_keys, expected);
    }
}
