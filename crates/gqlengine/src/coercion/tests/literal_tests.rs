use crate::coercion::Variables;
use crate::coercion::is_valid_literal_value;
use crate::coercion::literal_to_json;
use crate::coercion::tests::utils::literal;
use crate::coercion::tests::utils::types;
use crate::coercion::value_from_ast;
use crate::types::TypeRef;
use serde_json::json;

fn type_ref(source: &str) -> TypeRef {
    TypeRef::parse(source).unwrap_or_else(|err| panic!("invalid type `{source}`: {err}"))
}

// =============================================================================
// literal_to_json
// =============================================================================

#[test]
fn literal_to_json_converts_constant_literals() {
    assert_eq!(
        literal_to_json(&literal("{a: [1, 2.5, \"s\", true, null, RED]}")),
        Some(json!({"a": [1, 2.5, "s", true, null, "RED"]})),
    );
}

#[test]
fn literal_to_json_rejects_variables() {
    assert_eq!(literal_to_json(&literal("[1, $a]")), None);
}

// =============================================================================
// value_from_ast
// =============================================================================

#[test]
fn value_from_ast_resolves_variables() {
    let types = types();
    let mut variables = Variables::new();
    variables.insert("a".to_string(), json!(2));

    assert_eq!(
        value_from_ast(&types, &literal("[1, $a, 3]"), &type_ref("[Int]"), Some(&variables)),
        Some(json!([1, 2, 3])),
    );
    assert_eq!(
        value_from_ast(&types, &literal("$a"), &type_ref("Int!"), Some(&variables)),
        Some(json!(2)),
    );
}

#[test]
fn missing_list_item_variable_becomes_null_when_allowed() {
    let types = types();
    let variables = Variables::new();
    assert_eq!(
        value_from_ast(&types, &literal("[1, $missing]"), &type_ref("[Int]"), Some(&variables)),
        Some(json!([1, null])),
    );
    assert_eq!(
        value_from_ast(&types, &literal("[1, $missing]"), &type_ref("[Int!]"), Some(&variables)),
        None,
    );
    assert_eq!(value_from_ast(&types, &literal("$missing"), &type_ref("Int"), None), None);
}

#[test]
fn missing_object_field_variable_uses_the_field_default() {
    let types = types();
    assert_eq!(
        value_from_ast(&types, &literal("{x: 1, y: $y}"), &type_ref("Point"), Some(&Variables::new())),
        Some(json!({"x": 1, "y": 0})),
    );
}

#[test]
fn value_from_ast_wraps_single_list_items() {
    assert_eq!(
        value_from_ast(&types(), &literal("RED"), &type_ref("[Color]"), None),
        Some(json!(["RED"])),
    );
}

#[test]
fn value_from_ast_rejects_invalid_literals() {
    let types = types();
    assert_eq!(value_from_ast(&types, &literal("null"), &type_ref("Int!"), None), None);
    assert_eq!(value_from_ast(&types, &literal("\"RED\""), &type_ref("Color"), None), None);
    assert_eq!(value_from_ast(&types, &literal("{x: 1, q: 2}"), &type_ref("Point"), None), None);
    assert_eq!(value_from_ast(&types, &literal("{points: []}"), &type_ref("Point"), None), None);
}

// =============================================================================
// is_valid_literal_value
// =============================================================================

#[test]
fn variables_and_valid_literals_have_no_problems() {
    let types = types();
    for source in ["$v", "{points: [{x: 1}], color: BLUE}", "null"] {
        let problems = is_valid_literal_value(&types, &type_ref("Shape"), &literal(source));
        assert!(problems.is_empty(), "`{source}` has problems: {problems:?}");
    }
}

#[test]
fn literal_problems_name_the_path_to_the_bad_value() {
    let types = types();
    assert_eq!(
        is_valid_literal_value(&types, &type_ref("Point"), &literal("{y: 1, z: 2}")),
        [
            "In field \"z\": Unknown field.",
            "In field \"x\": Expected \"Int!\", found null.",
        ],
    );
    assert_eq!(
        is_valid_literal_value(&types, &type_ref("[Int]"), &literal("[1, \"b\"]")),
        ["In element #1: Expected type \"Int\", found \"b\"."],
    );
    assert_eq!(
        is_valid_literal_value(&types, &type_ref("Color!"), &literal("null")),
        ["Expected \"Color!\", found null."],
    );
}
