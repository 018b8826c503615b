use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Variables may only be declared with input types.
#[derive(Default)]
pub struct VariablesAreInputTypes;

impl ValidationRule for VariablesAreInputTypes {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::VariableDefinition(var_def) = node else {
            return;
        };
        let var_type = &var_def.var_type;
        let is_non_input = ctx.schema()
            .type_named(var_type.innermost_name())
            .is_some_and(|named| !named.is_input_type());
        if is_non_input {
            ctx.report_at(
                format!(
                    "Variable \"${}\" cannot be non-input type \"{var_type}\".",
                    var_def.variable.name,
                ),
                [var_type.loc()],
            );
        }
    }
}
