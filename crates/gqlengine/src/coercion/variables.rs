use crate::coercion::TypeMap;
use crate::coercion::Variables;
use crate::coercion::coerce_input_value;
use crate::coercion::value_from_ast;
use crate::error::GraphQLError;
use crate::types::TypeRef;
use gqlengine_parser::ast;
use serde_json::Value as JsonValue;

/// Coerces the raw variable inputs of a request against an operation's
/// variable definitions.
///
/// A nullable variable that is neither provided nor defaulted is left out of
/// the result. All problems are reported, each located at the offending
/// variable definition.
pub fn coerce_variable_values(
    types: &TypeMap,
    definitions: &[ast::VariableDefinition],
    inputs: &serde_json::Map<String, JsonValue>,
) -> Result<Variables, Vec<GraphQLError>> {
    let mut coerced = Variables::new();
    let mut errors = vec![];

    for def in definitions {
        let var_name = def.variable.name.as_str();
        let var_type = TypeRef::from_ast(&def.var_type);
        let located = |message: String| GraphQLError::located(message, [def.loc.as_ref()]);

        let is_input_type = types.get(var_type.innermost_name())
            .is_some_and(|named| named.is_input_type());
        if !is_input_type {
            errors.push(located(format!(
                "Variable \"${var_name}\" expected value of type \"{var_type}\" which cannot be \
                 used as an input type.",
            )));
            continue;
        }

        match inputs.get(var_name) {
            None | Some(JsonValue::Null) if def.default_value.is_some() => {
                let default = def.default_value.as_ref()
                    .and_then(|default| value_from_ast(types, default, &var_type, None));
                match default {
                    Some(value) => {
                        coerced.insert(var_name.to_string(), value);
                    },
                    None => errors.push(located(format!(
                        "Variable \"${var_name}\" of type \"{var_type}\" has invalid default value.",
                    ))),
                }
            },
            None | Some(JsonValue::Null) if var_type.is_non_null() => {
                errors.push(located(format!(
                    "Variable \"${var_name}\" of required type \"{var_type}\" was not provided.",
                )));
            },
            None => {},
            Some(value) => match coerce_input_value(types, value, &var_type) {
                Some(value) => {
                    coerced.insert(var_name.to_string(), value);
                },
                None => errors.push(located(format!(
                    "Variable \"${var_name}\" expected value of type \"{var_type}\" but got: {value}.",
                ))),
            },
        }
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}
