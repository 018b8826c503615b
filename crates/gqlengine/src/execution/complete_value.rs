use crate::error::FieldError;
use crate::error::GraphQLError;
use crate::execution::ExecutionContext;
use crate::execution::ResolveInfo;
use crate::execution::ResponsePath;
use crate::execution::execute::execute_selection_set;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::ResolveTypeFn;
use crate::types::TypeRef;
use crate::value::Value;
use gqlengine_parser::ast;
use serde_json::Value as JsonValue;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Marks a null that must propagate to the nearest nullable ancestor. The
/// error explaining it has already been recorded.
#[derive(Debug)]
pub(crate) struct PropagateNull;

pub(crate) type CompletionResult = Result<JsonValue, PropagateNull>;

/// Nulls the value if `ty` is nullable, or keeps propagating otherwise.
pub(crate) fn try_nullify(ty: &TypeRef, result: CompletionResult) -> CompletionResult {
    match result {
        Ok(value) => Ok(value),
        Err(PropagateNull) if ty.is_non_null() => Err(PropagateNull),
        Err(PropagateNull) => Ok(JsonValue::Null),
    }
}

/// Records an error located at the current field and path.
pub(crate) fn field_error(
    ec: &ExecutionContext<'_>,
    info: &ResolveInfo<'_>,
    path: &ResponsePath<'_>,
    message: impl Into<String>,
) -> CompletionResult {
    ec.push_error(
        GraphQLError::located(message, info.field_asts.iter().map(|field| field.loc.as_ref()))
            .with_path(path.to_vec()),
    );
    Err(PropagateNull)
}

/// Completes a raw resolved value against the field's declared type.
pub(crate) fn complete_value(
    ec: &ExecutionContext<'_>,
    return_type: &TypeRef,
    info: &ResolveInfo<'_>,
    path: &ResponsePath<'_>,
    value: Value,
) -> CompletionResult {
    if let Value::Lazy(thunk) = value {
        let forced = panic::catch_unwind(AssertUnwindSafe(|| thunk()))
            .unwrap_or_else(|payload| Err(FieldError::from_panic(payload)));
        return match forced {
            Ok(value) => complete_value(ec, return_type, info, path, value),
            Err(err) => field_error(ec, info, path, err.message),
        };
    }

    match return_type {
        TypeRef::NonNull(inner) => {
            let completed = complete_value(ec, inner, info, path, value)?;
            if completed.is_null() {
                return field_error(ec, info, path, format!(
                    "Cannot return null for non-nullable field {}.{}.",
                    info.parent_type.name(),
                    info.field_name,
                ));
            }
            Ok(completed)
        },

        _ if value.is_null() => Ok(JsonValue::Null),

        TypeRef::List(item_type) => {
            let Value::List(items) = value else {
                return field_error(ec, info, path, "User Error: expected iterable, but did not find one.");
            };
            let mut completed = Vec::with_capacity(items.len());
            for (idx, item) in items.into_iter().enumerate() {
                let item_path = path.index(idx);
                let item_result = complete_value(ec, item_type, info, &item_path, item);
                completed.push(try_nullify(item_type, item_result)?);
            }
            Ok(JsonValue::Array(completed))
        },

        TypeRef::Named(type_name) => match ec.schema.type_named(type_name) {
            Some(NamedType::Scalar(scalar)) => match value.to_json() {
                Ok(json) => Ok(scalar.serialize(&json).unwrap_or(JsonValue::Null)),
                Err(err) => field_error(ec, info, path, err.message),
            },
            Some(NamedType::Enum(enum_type)) => match value.to_json() {
                Ok(json) => Ok(enum_type.serialize(&json).unwrap_or(JsonValue::Null)),
                Err(err) => field_error(ec, info, path, err.message),
            },
            Some(NamedType::Object(object_type)) => {
                complete_object(ec, object_type, true, info, path, value)
            },
            Some(NamedType::Interface(iface)) => {
                complete_abstract(ec, iface.name(), iface.resolve_type_fn(), info, path, value)
            },
            Some(NamedType::Union(union_type)) => {
                complete_abstract(ec, union_type.name(), union_type.resolve_type_fn(), info, path, value)
            },
            Some(NamedType::InputObject(_)) | None => field_error(
                ec,
                info,
                path,
                format!("Cannot complete value of unexpected type \"{type_name}\"."),
            ),
        },
    }
}

fn complete_abstract(
    ec: &ExecutionContext<'_>,
    abstract_name: &str,
    resolve_type: Option<&ResolveTypeFn>,
    info: &ResolveInfo<'_>,
    path: &ResponsePath<'_>,
    value: Value,
) -> CompletionResult {
    let (runtime_type, check_is_type_of) = match resolve_type {
        Some(resolve_type) => {
            let Some(type_name) = resolve_type(&value, info) else {
                return Ok(JsonValue::Null);
            };
            match ec.schema.type_named(&type_name) {
                Some(NamedType::Object(object_type))
                    if ec.schema.is_possible_type(abstract_name, &type_name) => {
                    (Arc::clone(object_type), true)
                },
                _ => return field_error(ec, info, path, format!(
                    "Runtime Object type \"{type_name}\" is not a possible type for \"{abstract_name}\".",
                )),
            }
        },
        None => {
            let matched = ec.schema.possible_types(abstract_name)
                .iter()
                .find(|object_type| {
                    object_type.is_type_of_fn().is_some_and(|is_type_of| is_type_of(&value, info))
                });
            match matched {
                Some(object_type) => (Arc::clone(object_type), false),
                None => {
                    log::debug!(
                        "no possible type of {abstract_name} matched a {} at {:?}",
                        value.type_description(),
                        path.to_vec(),
                    );
                    return Ok(JsonValue::Null);
                },
            }
        },
    };
    complete_object(ec, &runtime_type, check_is_type_of, info, path, value)
}

fn complete_object(
    ec: &ExecutionContext<'_>,
    object_type: &ObjectType,
    check_is_type_of: bool,
    info: &ResolveInfo<'_>,
    path: &ResponsePath<'_>,
    value: Value,
) -> CompletionResult {
    if check_is_type_of {
        if let Some(is_type_of) = object_type.is_type_of_fn() {
            if !is_type_of(&value, info) {
                return field_error(ec, info, path, format!(
                    "Expected value of type \"{}\" but got: {}.",
                    object_type.name(),
                    value.type_description(),
                ));
            }
        }
    }

    let selection_sets: Vec<&ast::SelectionSet> = info.field_asts
        .iter()
        .filter_map(|field| field.selection_set.as_ref())
        .collect();
    execute_selection_set(ec, object_type, &value, &selection_sets, path, false)
        .map(JsonValue::Object)
}
