//! Tests for value literals, type references and the standalone
//! `parse_value` / `parse_type` entry points.

use crate::ParseOptions;
use crate::ast;
use crate::tests::utils::first_arg_value;
use crate::tests::utils::parse_ok;

fn arg_value(literal: &str) -> ast::Value {
    first_arg_value(&parse_ok(&format!("{{ f(a: {literal}) }}"))).clone()
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn numeric_literals_keep_source_text() {
    assert!(matches!(arg_value("-0"), ast::Value::Int(ast::IntValue { value, .. }) if value == "-0"));
    assert!(matches!(arg_value("1.50"), ast::Value::Float(ast::FloatValue { value, .. }) if value == "1.50"));
    assert!(matches!(arg_value("2e3"), ast::Value::Float(ast::FloatValue { value, .. }) if value == "2e3"));
}

#[test]
fn strings_are_decoded() {
    let ast::Value::String(s) = arg_value(r#""tab\there A""#) else {
        panic!("expected a string");
    };
    assert_eq!(s.value, "tab\there A");
    assert!(!s.block);
}

#[test]
fn block_strings_are_dedented() {
    let ast::Value::String(s) = arg_value("\"\"\"\n    one\n      two\n  \"\"\"") else {
        panic!("expected a string");
    };
    assert_eq!(s.value, "one\n  two");
    assert!(s.block);
}

#[test]
fn booleans_null_and_enums() {
    assert!(matches!(arg_value("true"), ast::Value::Boolean(ast::BooleanValue { value: true, .. })));
    assert!(matches!(arg_value("false"), ast::Value::Boolean(ast::BooleanValue { value: false, .. })));
    assert!(arg_value("null").is_null());
    assert!(matches!(arg_value("RED"), ast::Value::Enum(ast::EnumValue { value, .. }) if value == "RED"));
}

// =============================================================================
// Composites
// =============================================================================

#[test]
fn lists_and_objects_nest() {
    let value = arg_value(r#"{a: [1, {b: $v}], c: {}, d: []}"#);
    assert_eq!(value.to_string(), "{a: [1, {b: $v}], c: {}, d: []}");

    let ast::Value::Object(obj) = &value else {
        panic!("expected an object");
    };
    assert!(obj.field("c").is_some());
    assert!(obj.field("missing").is_none());
}

#[test]
fn for_each_variable_visits_nested_variables() {
    let value = arg_value("[$a, {b: [$c]}, 1]");
    let mut names = vec![];
    value.for_each_variable(&mut |var| names.push(var.name.value.clone()));
    assert_eq!(names, vec!["a", "c"]);
}

// =============================================================================
// Standalone entry points
// =============================================================================

#[test]
fn parse_value_accepts_variables() {
    let value = crate::parse_value("[1, $x, \"s\"]", ParseOptions::default())
        .expect("valid value");
    assert_eq!(value.to_string(), r#"[1, $x, "s"]"#);
}

#[test]
fn parse_value_rejects_trailing_tokens() {
    let err = crate::parse_value("1 2", ParseOptions::default())
        .expect_err("trailing token");
    assert_eq!(err.message, "Expected EOF, found Int \"2\"");
}

#[test]
fn parse_type_handles_wrapping() {
    let type_ref = crate::parse_type("[[Int!]]!", ParseOptions::default())
        .expect("valid type");
    assert_eq!(type_ref.to_string(), "[[Int!]]!");
    assert_eq!(type_ref.innermost_name(), "Int");
    assert!(type_ref.is_non_null());
}
