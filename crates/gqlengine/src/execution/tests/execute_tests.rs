use crate::ErrorLocation;
use crate::execution::ExecuteParams;
use crate::execution::execute;
use crate::execution::tests::utils::build_schema;
use crate::execution::tests::utils::json_map;
use crate::execution::tests::utils::parse_query;
use crate::execution::tests::utils::run;
use crate::value::Value;
use serde_json::json;

const BASIC_SDL: &str = "type Query { a: String, b: String, f(input: String): String }";

fn basic_schema() -> crate::schema::Schema {
    build_schema(BASIC_SDL, |builder| {
        builder.resolver("Query", "f", |params| {
            Ok(Value::from(params.args.get::<Option<String>>("input")?))
        })
    })
}

fn root() -> Value {
    Value::from(json!({"a": "apple", "b": "banana"}))
}

// =============================================================================
// Operation selection
// =============================================================================

#[test]
fn single_anonymous_operation_runs() {
    let result = run(&basic_schema(), "{ a b }", root());
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.data, json!({"a": "apple", "b": "banana"}));
}

#[test]
fn multiple_operations_require_a_name() {
    let schema = basic_schema();
    let result = run(&schema, "query A { a } query B { b }", root());
    assert_eq!(result.data, json!(null));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "Must provide operation name if query contains multiple operations.",
    );
}

#[test]
fn operation_name_selects_the_operation() {
    let schema = basic_schema();
    let doc = parse_query("query A { a } query B { b }");
    let result = execute(
        ExecuteParams::new(&schema, &doc)
            .with_root_value(root())
            .with_operation_name("B"),
    );
    assert!(result.errors.is_empty());
    assert_eq!(result.data, json!({"b": "banana"}));
}

#[test]
fn unknown_operation_name() {
    let schema = basic_schema();
    let doc = parse_query("query A { a }");
    let result = execute(ExecuteParams::new(&schema, &doc).with_operation_name("Nope"));
    assert_eq!(result.data, json!(null));
    assert_eq!(result.errors[0].message, "Unknown operation named \"Nope\".");
}

#[test]
fn document_without_operations() {
    let result = run(&basic_schema(), "fragment F on Query { a }", root());
    assert_eq!(result.data, json!(null));
    assert_eq!(result.errors[0].message, "Must provide an operation.");
}

#[test]
fn mutation_without_mutation_root() {
    let result = run(&basic_schema(), "mutation { a }", root());
    assert_eq!(result.data, json!(null));
    assert_eq!(result.errors[0].message, "Schema is not configured for mutations");
    assert_eq!(result.errors[0].locations, [ErrorLocation { line: 1, column: 1 }]);
}

// =============================================================================
// Variables
// =============================================================================

#[test]
fn variables_flow_into_arguments() {
    let schema = basic_schema();
    let doc = parse_query("query ($x: String) { f(input: $x) }");
    let result = execute(
        ExecuteParams::new(&schema, &doc).with_variables(json_map(json!({"x": "hello"}))),
    );
    assert_eq!(result.data, json!({"f": "hello"}));
}

#[test]
fn variable_default_is_used_when_not_provided() {
    let schema = basic_schema();
    let doc = parse_query("query ($x: String = \"fallback\") { f(input: $x) }");
    let result = execute(ExecuteParams::new(&schema, &doc));
    assert_eq!(result.data, json!({"f": "fallback"}));
}

#[test]
fn missing_required_variable_aborts_execution() {
    let schema = basic_schema();
    let doc = parse_query("query q($x: String!) { f(input: $x) }");
    let result = execute(ExecuteParams::new(&schema, &doc));

    assert_eq!(result.data, json!(null));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "Variable \"$x\" of required type \"String!\" was not provided.",
    );
    assert_eq!(result.errors[0].locations, [ErrorLocation { line: 1, column: 9 }]);
}

#[test]
fn variable_of_wrong_type_aborts_execution() {
    let schema = basic_schema();
    let doc = parse_query("query ($x: String) { f(input: $x) }");
    let result = execute(
        ExecuteParams::new(&schema, &doc).with_variables(json_map(json!({"x": [1, 2]}))),
    );
    assert_eq!(result.data, json!(null));
    assert_eq!(
        result.errors[0].message,
        "Variable \"$x\" expected value of type \"String\" but got: [1,2].",
    );
}

// =============================================================================
// Directives and fragments
// =============================================================================

#[test]
fn skip_and_include_directives() {
    let schema = basic_schema();
    let doc = parse_query(
        "query ($skipA: Boolean!) { a @skip(if: $skipA) b @include(if: false) f(input: \"x\") }",
    );
    let result = execute(
        ExecuteParams::new(&schema, &doc)
            .with_root_value(root())
            .with_variables(json_map(json!({"skipA": true}))),
    );
    assert_eq!(result.data, json!({"f": "x"}));
}

#[test]
fn skip_wins_over_include() {
    let result = run(&basic_schema(), "{ a @skip(if: true) @include(if: true) b }", root());
    assert_eq!(result.data, json!({"b": "banana"}));
}

#[test]
fn fragments_merge_into_one_response_object() {
    let result = run(
        &basic_schema(),
        "{ ...A ... on Query { b } a } fragment A on Query { a }",
        root(),
    );
    assert_eq!(result.data.to_string(), r#"{"a":"apple","b":"banana"}"#);
}

#[test]
fn fragment_cycles_terminate_without_validation() {
    let result = run(
        &basic_schema(),
        "{ ...F } fragment F on Query { a ...G } fragment G on Query { ...F }",
        root(),
    );
    assert!(result.errors.is_empty());
    assert_eq!(result.data, json!({"a": "apple"}));
}

#[test]
fn unknown_fields_are_left_out() {
    let result = run(&basic_schema(), "{ a nope }", root());
    assert!(result.errors.is_empty());
    assert_eq!(result.data, json!({"a": "apple"}));
}

// =============================================================================
// Introspection
// =============================================================================

#[test]
fn typename_reports_the_runtime_type() {
    let result = run(&basic_schema(), "{ __typename a }", root());
    assert_eq!(result.data, json!({"__typename": "Query", "a": "apple"}));
}

#[test]
fn type_meta_field_describes_a_type() {
    let result = run(
        &basic_schema(),
        "{ __type(name: \"Query\") { name kind fields { name type { name } } } }",
        root(),
    );
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.data, json!({
        "__type": {
            "name": "Query",
            "kind": "OBJECT",
            "fields": [
                {"name": "a", "type": {"name": "String"}},
                {"name": "b", "type": {"name": "String"}},
                {"name": "f", "type": {"name": "String"}},
            ],
        },
    }));
}

#[test]
fn type_meta_field_for_unknown_type_is_null() {
    let result = run(&basic_schema(), "{ __type(name: \"Nope\") { name } }", root());
    assert!(result.errors.is_empty());
    assert_eq!(result.data, json!({"__type": null}));
}

#[test]
fn schema_meta_field_lists_roots() {
    let result = run(
        &basic_schema(),
        "{ __schema { queryType { name } mutationType { name } } }",
        root(),
    );
    assert_eq!(result.data, json!({
        "__schema": {"queryType": {"name": "Query"}, "mutationType": null},
    }));
}
