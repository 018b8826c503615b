use crate::coercion::TypeMap;
use crate::coercion::Variables;
use crate::types::NamedType;
use crate::types::TypeRef;
use gqlengine_parser::ast;
use serde_json::Value as JsonValue;

/// Converts a literal that contains no variables into JSON, without any
/// type information. Enum literals become strings.
///
/// Returns `None` if the literal contains a variable.
pub fn literal_to_json(value: &ast::Value) -> Option<JsonValue> {
    Some(match value {
        ast::Value::Variable(_) => return None,
        ast::Value::Int(int) => match int.value.parse::<i64>() {
            Ok(i) => JsonValue::from(i),
            Err(_) => float_literal(&int.value)?,
        },
        ast::Value::Float(float) => float_literal(&float.value)?,
        ast::Value::String(s) => JsonValue::String(s.value.clone()),
        ast::Value::Boolean(b) => JsonValue::Bool(b.value),
        ast::Value::Null(_) => JsonValue::Null,
        ast::Value::Enum(e) => JsonValue::String(e.value.clone()),
        ast::Value::List(list) => JsonValue::Array(
            list.values.iter()
                .map(literal_to_json)
                .collect::<Option<Vec<_>>>()?,
        ),
        ast::Value::Object(obj) => {
            let mut map = serde_json::Map::with_capacity(obj.fields.len());
            for field in &obj.fields {
                map.insert(field.name.value.clone(), literal_to_json(&field.value)?);
            }
            JsonValue::Object(map)
        },
    })
}

fn float_literal(text: &str) -> Option<JsonValue> {
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
}

/// Produces the internal value of `value` for an input of type
/// `value_type`, resolving variables from `variables` (which must already be
/// coerced).
///
/// `None` means the literal is invalid for the type, or refers to a variable
/// that was not provided.
pub fn value_from_ast(
    types: &TypeMap,
    value: &ast::Value,
    value_type: &TypeRef,
    variables: Option<&Variables>,
) -> Option<JsonValue> {
    if let ast::Value::Variable(var) = value {
        let var_value = variables?.get(var.name.as_str())?;
        if var_value.is_null() && value_type.is_non_null() {
            return None;
        }
        return Some(var_value.clone());
    }

    match value_type {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                return None;
            }
            value_from_ast(types, value, inner, variables)
        },
        _ if value.is_null() => Some(JsonValue::Null),
        TypeRef::List(item_type) => match value {
            ast::Value::List(list) => {
                let mut items = Vec::with_capacity(list.values.len());
                for item in &list.values {
                    if is_missing_variable(item, variables) {
                        if item_type.is_non_null() {
                            return None;
                        }
                        items.push(JsonValue::Null);
                        continue;
                    }
                    items.push(value_from_ast(types, item, item_type, variables)?);
                }
                Some(JsonValue::Array(items))
            },
            single => value_from_ast(types, single, item_type, variables)
                .map(|item| JsonValue::Array(vec![item])),
        },
        TypeRef::Named(name) => match types.get(name)? {
            NamedType::Scalar(scalar) => scalar.parse_literal(value),
            NamedType::Enum(enum_type) => enum_type.parse_literal(value),
            NamedType::InputObject(input_object) => {
                let ast::Value::Object(obj) = value else {
                    return None;
                };
                if obj.fields.iter().any(|field| input_object.field(field.name.as_str()).is_none()) {
                    return None;
                }
                let mut coerced = serde_json::Map::new();
                for (field_name, field_def) in input_object.fields() {
                    let field_ast = obj.field(field_name)
                        .filter(|field| !is_missing_variable(&field.value, variables));
                    match field_ast {
                        Some(field) => {
                            let field_value = value_from_ast(
                                types,
                                &field.value,
                                field_def.value_type(),
                                variables,
                            )?;
                            coerced.insert(field_name.clone(), field_value);
                        },
                        None => {
                            if let Some(default) = field_def.default_value() {
                                let default = crate::coercion::coerce_input_value(
                                    types,
                                    default,
                                    field_def.value_type(),
                                )?;
                                coerced.insert(field_name.clone(), default);
                            } else if field_def.value_type().is_non_null() {
                                return None;
                            }
                        },
                    }
                }
                Some(JsonValue::Object(coerced))
            },
            NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_) => None,
        },
    }
}

fn is_missing_variable(value: &ast::Value, variables: Option<&Variables>) -> bool {
    match value {
        ast::Value::Variable(var) => variables.is_none_or(|vars| !vars.contains_key(var.name.as_str())),
        _ => false,
    }
}

/// Checks a literal against an input type without coercing it, returning a
/// description of each problem found. Variables are accepted; their usage
/// is checked separately.
pub fn is_valid_literal_value(
    types: &TypeMap,
    value_type: &TypeRef,
    value: &ast::Value,
) -> Vec<String> {
    if let TypeRef::NonNull(inner) = value_type {
        if value.is_null() {
            return vec![format!("Expected \"{value_type}\", found null.")];
        }
        return is_valid_literal_value(types, inner, value);
    }

    if value.is_null() || value.as_variable().is_some() {
        return vec![];
    }

    match value_type {
        TypeRef::NonNull(_) => vec![],
        TypeRef::List(item_type) => match value {
            ast::Value::List(list) => list.values.iter()
                .enumerate()
                .flat_map(|(idx, item)| {
                    is_valid_literal_value(types, item_type, item)
                        .into_iter()
                        .map(move |err| format!("In element #{idx}: {err}"))
                })
                .collect(),
            single => is_valid_literal_value(types, item_type, single),
        },
        TypeRef::Named(name) => match types.get(name) {
            Some(NamedType::InputObject(input_object)) => {
                let ast::Value::Object(obj) = value else {
                    return vec![format!("Expected \"{name}\", found not an object.")];
                };
                let mut errors = vec![];
                for field in &obj.fields {
                    if input_object.field(field.name.as_str()).is_none() {
                        errors.push(format!("In field \"{}\": Unknown field.", field.name));
                    }
                }
                for (field_name, field_def) in input_object.fields() {
                    let field_errors = match obj.field(field_name) {
                        Some(field) => is_valid_literal_value(types, field_def.value_type(), &field.value),
                        None if field_def.value_type().is_non_null() && field_def.default_value().is_none() => {
                            vec![format!("Expected \"{}\", found null.", field_def.value_type())]
                        },
                        None => vec![],
                    };
                    errors.extend(
                        field_errors.into_iter()
                            .map(|err| format!("In field \"{field_name}\": {err}")),
                    );
                }
                errors
            },
            Some(NamedType::Scalar(scalar)) if scalar.parse_literal(value).is_none() => {
                vec![format!("Expected type \"{name}\", found {value}.")]
            },
            Some(NamedType::Enum(enum_type)) if enum_type.parse_literal(value).is_none() => {
                vec![format!("Expected type \"{name}\", found {value}.")]
            },
            Some(NamedType::Scalar(_) | NamedType::Enum(_)) => vec![],
            Some(_) | None => vec![format!("Expected type \"{name}\", found {value}.")],
        },
    }
}
