use crate::coercion::TypeMap;
use crate::types::NamedType;
use crate::types::TypeRef;
use serde_json::Value as JsonValue;

/// Coerces an external JSON value (a variable, or a schema default) against
/// an input type. `None` means the value is invalid for the type.
pub fn coerce_input_value(
    types: &TypeMap,
    value: &JsonValue,
    value_type: &TypeRef,
) -> Option<JsonValue> {
    match value_type {
        TypeRef::NonNull(inner) => {
            if value.is_null() {
                return None;
            }
            coerce_input_value(types, value, inner)
        },
        _ if value.is_null() => Some(JsonValue::Null),
        TypeRef::List(item_type) => match value {
            JsonValue::Array(items) => items.iter()
                .map(|item| coerce_input_value(types, item, item_type))
                .collect::<Option<Vec<_>>>()
                .map(JsonValue::Array),
            single => coerce_input_value(types, single, item_type)
                .map(|item| JsonValue::Array(vec![item])),
        },
        TypeRef::Named(name) => match types.get(name)? {
            NamedType::Scalar(scalar) => scalar.parse_value(value),
            NamedType::Enum(enum_type) => enum_type.parse_value(value),
            NamedType::InputObject(input_object) => {
                let JsonValue::Object(obj) = value else {
                    return None;
                };
                if obj.keys().any(|key| input_object.field(key).is_none()) {
                    return None;
                }
                let mut coerced = serde_json::Map::new();
                for (field_name, field_def) in input_object.fields() {
                    match obj.get(field_name) {
                        Some(field_value) => {
                            let field_value = coerce_input_value(types, field_value, field_def.value_type())?;
                            coerced.insert(field_name.clone(), field_value);
                        },
                        None => {
                            if let Some(default) = field_def.default_value() {
                                let default = coerce_input_value(types, default, field_def.value_type())?;
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

/// Checks an external JSON value against an input type, returning a
/// description of each problem found (empty when valid).
pub fn is_valid_input_value(
    types: &TypeMap,
    value: &JsonValue,
    value_type: &TypeRef,
) -> Vec<String> {
    if let TypeRef::NonNull(inner) = value_type {
        if value.is_null() {
            return vec![format!("Expected \"{value_type}\", found null.")];
        }
        return is_valid_input_value(types, value, inner);
    }
    if value.is_null() {
        return vec![];
    }

    match value_type {
        TypeRef::NonNull(_) => vec![],
        TypeRef::List(item_type) => match value {
            JsonValue::Array(items) => items.iter()
                .enumerate()
                .flat_map(|(idx, item)| {
                    is_valid_input_value(types, item, item_type)
                        .into_iter()
                        .map(move |err| format!("In element #{idx}: {err}"))
                })
                .collect(),
            single => is_valid_input_value(types, single, item_type),
        },
        TypeRef::Named(name) => match types.get(name) {
            Some(NamedType::InputObject(input_object)) => {
                let JsonValue::Object(obj) = value else {
                    return vec![format!("Expected \"{name}\", found not an object.")];
                };
                let mut errors: Vec<String> = obj.keys()
                    .filter(|key| input_object.field(key).is_none())
                    .map(|key| format!("In field \"{key}\": Unknown field."))
                    .collect();
                for (field_name, field_def) in input_object.fields() {
                    let field_value = obj.get(field_name).unwrap_or(&JsonValue::Null);
                    if !obj.contains_key(field_name) && field_def.default_value().is_some() {
                        continue;
                    }
                    errors.extend(
                        is_valid_input_value(types, field_value, field_def.value_type())
                            .into_iter()
                            .map(|err| format!("In field \"{field_name}\": {err}")),
                    );
                }
                errors
            },
            Some(NamedType::Scalar(scalar)) if scalar.parse_value(value).is_none() => {
                vec![format!("Expected type \"{name}\", found {value}.")]
            },
            Some(NamedType::Enum(enum_type)) if enum_type.parse_value(value).is_none() => {
                vec![format!("Expected type \"{name}\", found {value}.")]
            },
            Some(NamedType::Scalar(_) | NamedType::Enum(_)) => vec![],
            Some(_) | None => vec![format!("Expected type \"{name}\", found {value}.")],
        },
    }
}
