use crate::types::MAX_INT;
use crate::types::MIN_INT;
use crate::types::scalars;
use crate::types::tests::utils::literal;
use serde_json::json;

// =============================================================================
// Int
// =============================================================================

#[test]
fn int_accepts_whole_numbers_within_range() {
    let int = scalars::int_type();
    assert_eq!(int.parse_value(&json!(42)), Some(json!(42)));
    assert_eq!(int.parse_value(&json!(MAX_INT)), Some(json!(MAX_INT)));
    assert_eq!(int.parse_value(&json!(MIN_INT)), Some(json!(MIN_INT)));
}

#[test]
fn int_rejects_values_beyond_the_safe_range() {
    let int = scalars::int_type();
    assert_eq!(int.parse_value(&json!(MAX_INT + 1)), None);
    assert_eq!(int.parse_value(&json!(MIN_INT - 1)), None);
    assert_eq!(int.parse_value(&json!(1e100)), None);
}

#[test]
fn int_coerces_booleans_strings_and_floats() {
    let int = scalars::int_type();
    assert_eq!(int.serialize(&json!(true)), Some(json!(1)));
    assert_eq!(int.serialize(&json!(false)), Some(json!(0)));
    assert_eq!(int.serialize(&json!("12")), Some(json!(12)));
    assert_eq!(int.serialize(&json!(" -3 ")), Some(json!(-3)));
    assert_eq!(int.serialize(&json!(1.9)), Some(json!(1)));
    assert_eq!(int.serialize(&json!("twelve")), None);
    assert_eq!(int.serialize(&json!(null)), None);
    assert_eq!(int.serialize(&json!([1])), None);
}

#[test]
fn int_literal_must_be_an_in_range_integer() {
    let int = scalars::int_type();
    assert_eq!(int.parse_literal(&literal("7")), Some(json!(7)));
    assert_eq!(int.parse_literal(&literal("-7")), Some(json!(-7)));
    assert_eq!(int.parse_literal(&literal("9007199254740992")), None);
    assert_eq!(int.parse_literal(&literal("1.5")), None);
    assert_eq!(int.parse_literal(&literal("\"7\"")), None);
    assert_eq!(int.parse_literal(&literal("true")), None);
}

// =============================================================================
// Float
// =============================================================================

#[test]
fn float_coerces_numbers_strings_and_booleans() {
    let float = scalars::float_type();
    assert_eq!(float.parse_value(&json!(1.5)), Some(json!(1.5)));
    assert_eq!(float.parse_value(&json!(2)), Some(json!(2.0)));
    assert_eq!(float.parse_value(&json!("3.25")), Some(json!(3.25)));
    assert_eq!(float.parse_value(&json!(true)), Some(json!(1.0)));
    assert_eq!(float.parse_value(&json!("abc")), None);
    assert_eq!(float.parse_value(&json!({})), None);
}

#[test]
fn float_literal_accepts_int_and_float_tokens() {
    let float = scalars::float_type();
    assert_eq!(float.parse_literal(&literal("2")), Some(json!(2.0)));
    assert_eq!(float.parse_literal(&literal("-0.5e1")), Some(json!(-5.0)));
    assert_eq!(float.parse_literal(&literal("\"2\"")), None);
}

// =============================================================================
// String, Boolean, ID
// =============================================================================

#[test]
fn string_serializes_scalars_as_text() {
    let string = scalars::string_type();
    assert_eq!(string.serialize(&json!("abc")), Some(json!("abc")));
    assert_eq!(string.serialize(&json!(true)), Some(json!("true")));
    assert_eq!(string.serialize(&json!(10)), Some(json!("10")));
    assert_eq!(string.serialize(&json!(null)), None);
    assert_eq!(string.parse_literal(&literal("\"abc\"")), Some(json!("abc")));
    assert_eq!(string.parse_literal(&literal("abc")), None);
}

#[test]
fn boolean_treats_empty_and_false_strings_as_false() {
    let boolean = scalars::boolean_type();
    assert_eq!(boolean.parse_value(&json!("")), Some(json!(false)));
    assert_eq!(boolean.parse_value(&json!("false")), Some(json!(false)));
    assert_eq!(boolean.parse_value(&json!("no")), Some(json!(true)));
    assert_eq!(boolean.parse_value(&json!(0)), Some(json!(false)));
    assert_eq!(boolean.parse_value(&json!(2.5)), Some(json!(true)));
    assert_eq!(boolean.parse_literal(&literal("false")), Some(json!(false)));
    assert_eq!(boolean.parse_literal(&literal("\"false\"")), None);
}

#[test]
fn id_accepts_int_and_string_literals() {
    let id = scalars::id_type();
    assert_eq!(id.parse_literal(&literal("4")), Some(json!("4")));
    assert_eq!(id.parse_literal(&literal("\"abc\"")), Some(json!("abc")));
    assert_eq!(id.parse_literal(&literal("4.0")), None);
    assert_eq!(id.serialize(&json!(123)), Some(json!("123")));
}

#[test]
fn builtin_scalars_cover_every_builtin_name() {
    let names: Vec<String> = scalars::builtin_scalars()
        .iter()
        .map(|scalar| scalar.name().to_string())
        .collect();
    assert_eq!(names, [scalars::INT, scalars::FLOAT, scalars::STRING, scalars::BOOLEAN, scalars::ID]);
}
