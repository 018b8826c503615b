use crate::coercion::TypeMap;
use crate::coercion::Variables;
use crate::coercion::coerce_input_value;
use crate::coercion::value_from_ast;
use crate::error::GraphQLError;
use crate::types::InputValueDefinition;
use crate::value::Arguments;
use gqlengine_parser::ast;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Coerces the arguments given to a field (or directive) against its
/// argument definitions.
///
/// A missing or `null` argument falls back to its default. Arguments with no
/// definition are ignored.
pub fn coerce_argument_values(
    types: &TypeMap,
    definitions: &IndexMap<String, InputValueDefinition>,
    argument_asts: &[ast::Argument],
    variables: &Variables,
) -> Result<Arguments, GraphQLError> {
    let mut coerced = IndexMap::with_capacity(definitions.len());

    for (arg_name, arg_def) in definitions {
        let arg_type = arg_def.value_type();
        let arg_ast = argument_asts.iter().find(|arg| arg.name.value == *arg_name);

        let provided = match arg_ast {
            Some(arg) => match &arg.value {
                ast::Value::Variable(var) => variables.get(var.name.as_str()).cloned(),
                literal if literal.is_null() => Some(JsonValue::Null),
                literal => Some(value_from_ast(types, literal, arg_type, Some(variables)).ok_or_else(|| {
                    GraphQLError::located(
                        format!("Argument \"{arg_name}\" has invalid value {literal}."),
                        [arg.loc.as_ref()],
                    )
                })?),
            },
            None => None,
        };

        match provided {
            Some(value) if !value.is_null() => {
                coerced.insert(arg_name.clone(), value);
            },
            _ => {
                if let Some(default) = arg_def.default_value() {
                    let default = coerce_input_value(types, default, arg_type).ok_or_else(|| {
                        GraphQLError::new(format!(
                            "Argument \"{arg_name}\" has invalid default value {default}.",
                        ))
                    })?;
                    coerced.insert(arg_name.clone(), default);
                } else if arg_type.is_non_null() {
                    return Err(GraphQLError::located(
                        format!(
                            "Argument \"{arg_name}\" of required type \"{arg_type}\" was not provided.",
                        ),
                        [arg_ast.and_then(|arg| arg.loc.as_ref())],
                    ));
                } else if provided.is_some() {
                    coerced.insert(arg_name.clone(), JsonValue::Null);
                }
            },
        }
    }

    Ok(Arguments::new(coerced))
}
