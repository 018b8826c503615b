use crate::types::TypeRef;
use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// A variable may only be used where its declared type fits the expected
/// type. A variable with a default counts as non-null.
#[derive(Default)]
pub struct VariablesInAllowedPosition;

impl ValidationRule for VariablesInAllowedPosition {
    fn leave<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::OperationDefinition(op) = node else {
            return;
        };
        let var_defs: HashMap<&str, _> = op.variable_definitions
            .iter()
            .map(|var_def| (var_def.variable.name.as_str(), var_def))
            .collect();

        for usage in ctx.recursive_variable_usages(op) {
            let var_name = usage.variable.name.as_str();
            let (Some(var_def), Some(expected_type)) = (var_defs.get(var_name), usage.input_type) else {
                continue;
            };
            let var_type = TypeRef::from_ast(&var_def.var_type);
            if ctx.schema().type_named(var_type.innermost_name()).is_none() {
                continue;
            }

            let effective_type = match &var_def.default_value {
                Some(_) if !var_type.is_non_null() => TypeRef::non_null(var_type.clone()),
                _ => var_type.clone(),
            };
            if !var_type_allowed(&effective_type, &expected_type) {
                ctx.report_at(
                    format!(
                        "Variable \"${var_name}\" of type \"{var_type}\" used in position expecting type \"{expected_type}\".",
                    ),
                    [usage.variable.loc.as_ref()],
                );
            }
        }
    }
}

/// A variable type fits if it is the expected type or a stricter one: it
/// may be non-null where nullable is expected, at any list depth.
fn var_type_allowed(var_type: &TypeRef, expected_type: &TypeRef) -> bool {
    match (var_type, expected_type) {
        (TypeRef::NonNull(var_inner), TypeRef::NonNull(expected_inner)) => {
            var_type_allowed(var_inner, expected_inner)
        },
        (_, TypeRef::NonNull(_)) => false,
        (TypeRef::NonNull(var_inner), _) => var_type_allowed(var_inner, expected_type),
        (TypeRef::List(var_item), TypeRef::List(expected_item)) => {
            var_type_allowed(var_item, expected_item)
        },
        _ => var_type == expected_type,
    }
}
