use crate::ErrorLocation;
use crate::PathSegment;
use crate::error::FieldError;
use crate::execution::tests::utils::build_schema;
use crate::execution::tests::utils::run;
use crate::types::ScalarType;
use crate::value::Value;
use serde_json::json;

fn path(segments: &[PathSegment]) -> Option<Vec<PathSegment>> {
    Some(segments.to_vec())
}

// =============================================================================
// Null propagation
// =============================================================================

#[test]
fn null_item_in_non_null_list_nulls_the_list() {
    let schema = build_schema(
        "type Query { nest: DataType }\ntype DataType { test: [Int!] }",
        |builder| builder,
    );
    let result = run(&schema, "{ nest { test } }", json!({"nest": {"test": [1, null, 3]}}));

    assert_eq!(result.data, json!({"nest": {"test": null}}));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Cannot return null for non-nullable field DataType.test.");
    assert_eq!(result.errors[0].locations, [ErrorLocation { line: 1, column: 10 }]);
    assert_eq!(result.errors[0].path, path(&["nest".into(), "test".into(), 1.into()]));
}

#[test]
fn null_items_are_kept_in_nullable_lists() {
    let schema = build_schema(
        "type Query { nest: DataType }\ntype DataType { test: [Int]! }",
        |builder| builder,
    );
    let result = run(&schema, "{ nest { test } }", json!({"nest": {"test": [1, null, 3]}}));
    assert!(result.errors.is_empty());
    assert_eq!(result.data, json!({"nest": {"test": [1, null, 3]}}));
}

#[test]
fn null_propagates_to_the_nearest_nullable_ancestor() {
    let schema = build_schema(
        concat!(
            "type Query { nest: Outer }\n",
            "type Outer { inner: Inner!, sibling: String }\n",
            "type Inner { value: Int! }\n",
        ),
        |builder| builder,
    );
    let result = run(
        &schema,
        "{ nest { sibling inner { value } } }",
        json!({"nest": {"sibling": "kept?", "inner": {"value": null}}}),
    );

    assert_eq!(result.data, json!({"nest": null}));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Cannot return null for non-nullable field Inner.value.");
    assert_eq!(result.errors[0].path, path(&["nest".into(), "inner".into(), "value".into()]));
}

#[test]
fn non_null_root_field_nulls_the_data() {
    let schema = build_schema("type Query { required: String!, other: String }", |builder| builder);
    let result = run(&schema, "{ other required }", json!({"other": "x"}));
    assert_eq!(result.data, json!(null));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Cannot return null for non-nullable field Query.required.");
}

#[test]
fn resolver_error_on_non_null_field_propagates() {
    let schema = build_schema(
        "type Query { item: Item }\ntype Item { id: ID!, name: String }",
        |builder| builder.resolver("Item", "id", |_| Err(FieldError::new("id lookup failed"))),
    );
    let result = run(&schema, "{ item { name id } }", json!({"item": {"name": "thing"}}));
    assert_eq!(result.data, json!({"item": null}));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "id lookup failed");
    assert_eq!(result.errors[0].path, path(&["item".into(), "id".into()]));
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn errors_inside_lists_carry_the_item_index() {
    let schema = build_schema(
        "type Query { items: [Item] }\ntype Item { name: String }",
        |builder| {
            builder.resolver("Item", "name", |params| {
                match params.source.field("fail") {
                    Some(Value::Boolean(true)) => Err("cannot name this item".into()),
                    _ => Ok(params.source.field("name").unwrap_or_default()),
                }
            })
        },
    );
    let result = run(
        &schema,
        "{ items { name } }",
        json!({"items": [{"name": "a"}, {"fail": true}, {"name": "c"}]}),
    );

    assert_eq!(result.data, json!({"items": [{"name": "a"}, {"name": null}, {"name": "c"}]}));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, path(&["items".into(), 1.into(), "name".into()]));
}

#[test]
fn non_list_value_for_list_field() {
    let schema = build_schema("type Query { tags: [String] }", |builder| builder);
    let result = run(&schema, "{ tags }", json!({"tags": "not a list"}));
    assert_eq!(result.data, json!({"tags": null}));
    assert_eq!(result.errors[0].message, "User Error: expected iterable, but did not find one.");
}

// =============================================================================
// Leaf values
// =============================================================================

#[test]
fn enum_values_serialize_by_name() {
    let schema = build_schema(
        "enum Color { RED GREEN }\ntype Query { color: Color, bad: Color }",
        |builder| builder,
    );
    let result = run(&schema, "{ color bad }", json!({"color": "GREEN", "bad": "PURPLE"}));
    assert!(result.errors.is_empty());
    assert_eq!(result.data, json!({"color": "GREEN", "bad": null}));
}

#[test]
fn custom_scalar_serializes_resolved_values() {
    let schema = build_schema("scalar Upper\ntype Query { shout: Upper }", |builder| {
        builder.scalar(ScalarType::new("Upper").with_serialize(|value| {
            value.as_str().map(|s| json!(s.to_uppercase()))
        }))
    });
    let result = run(&schema, "{ shout }", json!({"shout": "hello"}));
    assert_eq!(result.data, json!({"shout": "HELLO"}));
}

#[test]
fn builtin_scalars_coerce_resolved_values() {
    let schema = build_schema(
        "type Query { count: Int, ratio: Float, label: String, on: Boolean, id: ID }",
        |builder| builder,
    );
    let result = run(
        &schema,
        "{ count ratio label on id }",
        json!({"count": 2.9, "ratio": 1, "label": 5, "on": "false", "id": 42}),
    );
    assert_eq!(result.data, json!({"count": 2, "ratio": 1.0, "label": "5", "on": false, "id": "42"}));
}

// =============================================================================
// Lazy values
// =============================================================================

#[test]
fn lazy_values_are_forced_during_completion() {
    let schema = build_schema("type Query { later: String, many: [Int] }", |builder| {
        builder
            .resolver("Query", "later", |_| Ok(Value::lazy(|| Ok(Value::from("now")))))
            .resolver("Query", "many", |_| {
                Ok(Value::List(vec![Value::from(1), Value::lazy(|| Ok(Value::from(2)))]))
            })
    });
    let result = run(&schema, "{ later many }", Value::Null);
    assert!(result.errors.is_empty());
    assert_eq!(result.data, json!({"later": "now", "many": [1, 2]}));
}

#[test]
fn failing_lazy_value_is_a_field_error() {
    let schema = build_schema("type Query { later: String }", |builder| {
        builder.resolver("Query", "later", |_| {
            Ok(Value::lazy(|| Err(FieldError::new("thunk failed"))))
        })
    });
    let result = run(&schema, "{ later }", Value::Null);
    assert_eq!(result.data, json!({"later": null}));
    assert_eq!(result.errors[0].message, "thunk failed");
    assert_eq!(result.errors[0].path, path(&["later".into()]));
}
