use crate::coercion::is_valid_literal_value;
use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Argument literals must be valid for the argument's type.
#[derive(Default)]
pub struct ArgumentsOfCorrectType;

impl ValidationRule for ArgumentsOfCorrectType {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::Argument(arg) = node else {
            return;
        };
        let Some(arg_def) = ctx.type_info().argument() else {
            return;
        };
        let problems = is_valid_literal_value(ctx.schema().type_map(), arg_def.value_type(), &arg.value);
        if !problems.is_empty() {
            ctx.report_at(
                format!(
                    "Argument \"{}\" expected type \"{}\" but got: {}.",
                    arg.name,
                    arg_def.value_type(),
                    arg.value,
                ),
                [arg.value.loc()],
            );
        }
    }
}
