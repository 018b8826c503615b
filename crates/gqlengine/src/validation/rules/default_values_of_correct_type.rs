use crate::coercion::is_valid_literal_value;
use crate::types::TypeRef;
use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// A variable default must be valid for the variable's type, and a
/// non-null variable can't have one.
#[derive(Default)]
pub struct DefaultValuesOfCorrectType;

impl ValidationRule for DefaultValuesOfCorrectType {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::VariableDefinition(var_def) = node else {
            return;
        };
        let Some(default_value) = &var_def.default_value else {
            return;
        };
        let var_name = &var_def.variable.name;
        let var_type = TypeRef::from_ast(&var_def.var_type);

        if var_type.is_non_null() {
            ctx.report_at(
                format!(
                    "Variable \"${var_name}\" of type \"{var_type}\" is required and will not use \
                     the default value. Perhaps you meant to use type \"{}\".",
                    var_type.nullable(),
                ),
                [default_value.loc()],
            );
            return;
        }

        let Some(input_type) = ctx.type_info().input_type() else {
            return;
        };
        if !is_valid_literal_value(ctx.schema().type_map(), input_type, default_value).is_empty() {
            ctx.report_at(
                format!("Variable \"${var_name}\" of type \"{var_type}\" has invalid default value: {default_value}."),
                [default_value.loc()],
            );
        }
    }
}
