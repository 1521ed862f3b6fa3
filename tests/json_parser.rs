//! The JSON layer end to end: validation tables and tree building checked
//! against serde_json's own parser.

use rstest::rstest;
use serde_json::json;

use valise::json::{parse, to_value, validate, JsonValidator};
use valise::parser::ParseError;

#[rstest]
#[case::empty_object("{}")]
#[case::empty_array("[]")]
#[case::scalars("[1, -2, 2.5, \"x\", true, false, null]")]
#[case::nested("{\"a\": {\"b\": [1, {\"c\": null}]}}")]
#[case::surrounding_whitespace("  { \"a\" : [ ] }  ")]
fn test_validate_accepts(#[case] document: &str) {
    assert!(validate(document));
}

#[rstest]
#[case::unclosed_object("{")]
#[case::unclosed_array("[1, 2")]
#[case::trailing_comma("[1,]")]
#[case::missing_colon("{\"a\" 1}")]
#[case::missing_value("{\"a\":}")]
#[case::bare_word("hello")]
#[case::trailing_garbage("[1] [2]")]
#[case::empty_input("")]
fn test_validate_rejects(#[case] document: &str) {
    assert!(!validate(document));
}

#[rstest]
#[case("{}")]
#[case("[]")]
#[case("{\"a\": 1, \"b\": [true, null, \"x\", 2.5]}")]
#[case("[[], [[]], {\"deep\": {\"deeper\": [0]}}]")]
#[case("\"just a string\"")]
#[case("-17")]
fn test_built_values_agree_with_serde_json(#[case] document: &str) {
    let built = to_value(document).unwrap();
    let expected: serde_json::Value = serde_json::from_str(document).unwrap();
    assert_eq!(built, expected);
}

#[test]
fn test_hexadecimal_extension() {
    // Not standard JSON, but the lexer carries a hex recognizer.
    assert_eq!(to_value("[0x1F]").unwrap(), json!([31]));
}

#[test]
fn test_member_values_keep_their_keys() {
    let built = to_value("{\"sum\": [1, 2, 3], \"ok\": true}").unwrap();
    assert_eq!(built, json!({"sum": [1, 2, 3], "ok": true}));
}

#[test]
fn test_unparseable_input_reports_the_offset() {
    assert_eq!(
        parse(&JsonValidator, "@"),
        Err(ParseError::NoApplicableCase { at: 0 })
    );
}

#[test]
fn test_trailing_garbage_reports_the_offset() {
    assert_eq!(
        parse(&JsonValidator, "[1] null"),
        Err(ParseError::NoApplicableCase { at: 3 })
    );
}
