//! The five built-in scalars and their coercion rules.

use crate::types::ScalarType;
use gqlengine_parser::ast;
use serde_json::Value as JsonValue;

/// Largest integer `Int` accepts: the largest integer an IEEE-754 double
/// represents exactly.
pub const MAX_INT: i64 = 9_007_199_254_740_991;
pub const MIN_INT: i64 = -9_007_199_254_740_991;

pub const INT: &str = "Int";
pub const FLOAT: &str = "Float";
pub const STRING: &str = "String";
pub const BOOLEAN: &str = "Boolean";
pub const ID: &str = "ID";

pub(crate) fn builtin_scalars() -> [ScalarType; 5] {
    [int_type(), float_type(), string_type(), boolean_type(), id_type()]
}

pub fn int_type() -> ScalarType {
    ScalarType::new(INT)
        .with_description(
            "The `Int` scalar type represents non-fractional signed whole numeric values \
             between -(2^53 - 1) and 2^53 - 1.",
        )
        .with_serialize(coerce_int)
        .with_parse_value(coerce_int)
        .with_parse_literal(|literal| match literal {
            ast::Value::Int(int) => int.value.parse::<i64>().ok().and_then(int_in_range),
            _ => None,
        })
}

pub fn float_type() -> ScalarType {
    ScalarType::new(FLOAT)
        .with_description(
            "The `Float` scalar type represents signed double-precision fractional values \
             as specified by IEEE 754.",
        )
        .with_serialize(coerce_float)
        .with_parse_value(coerce_float)
        .with_parse_literal(|literal| match literal {
            ast::Value::Float(ast::FloatValue { value, .. })
            | ast::Value::Int(ast::IntValue { value, .. }) => {
                value.parse::<f64>().ok().and_then(float_json)
            },
            _ => None,
        })
}

pub fn string_type() -> ScalarType {
    ScalarType::new(STRING)
        .with_description(
            "The `String` scalar type represents textual data, represented as UTF-8 \
             character sequences.",
        )
        .with_serialize(coerce_string)
        .with_parse_value(coerce_string)
        .with_parse_literal(|literal| match literal {
            ast::Value::String(s) => Some(JsonValue::String(s.value.clone())),
            _ => None,
        })
}

pub fn boolean_type() -> ScalarType {
    ScalarType::new(BOOLEAN)
        .with_description("The `Boolean` scalar type represents `true` or `false`.")
        .with_serialize(coerce_bool)
        .with_parse_value(coerce_bool)
        .with_parse_literal(|literal| match literal {
            ast::Value::Boolean(b) => Some(JsonValue::Bool(b.value)),
            _ => None,
        })
}

pub fn id_type() -> ScalarType {
    ScalarType::new(ID)
        .with_description(
            "The `ID` scalar type represents a unique identifier, often used to refetch an \
             object or as key for a cache. It is serialized as a String; an Int literal is \
             also accepted as input.",
        )
        .with_serialize(coerce_string)
        .with_parse_value(coerce_string)
        .with_parse_literal(|literal| match literal {
            ast::Value::Int(ast::IntValue { value, .. })
            | ast::Value::String(ast::StringValue { value, .. }) => {
                Some(JsonValue::String(value.clone()))
            },
            _ => None,
        })
}

fn int_in_range(value: i64) -> Option<JsonValue> {
    (MIN_INT..=MAX_INT).contains(&value).then(|| JsonValue::from(value))
}

fn float_to_int(value: f64) -> Option<JsonValue> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < MIN_INT as f64 || truncated > MAX_INT as f64 {
        return None;
    }
    int_in_range(truncated as i64)
}

fn float_json(value: f64) -> Option<JsonValue> {
    serde_json::Number::from_f64(value).map(JsonValue::Number)
}

fn coerce_int(value: &JsonValue) -> Option<JsonValue> {
    match value {
        JsonValue::Bool(b) => Some(JsonValue::from(i64::from(*b))),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => int_in_range(i),
            None => n.as_f64().and_then(float_to_int),
        },
        JsonValue::String(s) => s.trim().parse::<f64>().ok().and_then(float_to_int),
        _ => None,
    }
}

fn coerce_float(value: &JsonValue) -> Option<JsonValue> {
    match value {
        JsonValue::Bool(b) => float_json(if *b { 1.0 } else { 0.0 }),
        JsonValue::Number(n) => n.as_f64().and_then(float_json),
        JsonValue::String(s) => s.trim().parse::<f64>().ok().and_then(float_json),
        _ => None,
    }
}

fn coerce_string(value: &JsonValue) -> Option<JsonValue> {
    match value {
        JsonValue::String(_) => Some(value.clone()),
        JsonValue::Bool(b) => Some(JsonValue::String(b.to_string())),
        JsonValue::Number(n) => Some(JsonValue::String(n.to_string())),
        _ => None,
    }
}

fn coerce_bool(value: &JsonValue) -> Option<JsonValue> {
    match value {
        JsonValue::Bool(_) => Some(value.clone()),
        JsonValue::String(s) => Some(JsonValue::Bool(!(s.is_empty() || s == "false"))),
        JsonValue::Number(n) => Some(JsonValue::Bool(n.as_f64().is_some_and(|f| f != 0.0))),
        _ => None,
    }
}
