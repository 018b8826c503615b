use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashSet;

/// Every variable an operation uses, directly or through fragments, must be
/// defined by that operation.
#[derive(Default)]
pub struct NoUndefinedVariables;

impl ValidationRule for NoUndefinedVariables {
    fn leave<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::OperationDefinition(op) = node else {
            return;
        };
        let defined: HashSet<&str> = op.variable_definitions
            .iter()
            .map(|var_def| var_def.variable.name.as_str())
            .collect();

        for usage in ctx.recursive_variable_usages(op) {
            let var_name = usage.variable.name.as_str();
            if defined.contains(var_name) {
                continue;
            }
            match op.name_str() {
                Some(op_name) if usage.in_fragment => ctx.report_at(
                    format!("Variable \"${var_name}\" is not defined by operation \"{op_name}\"."),
                    [usage.variable.loc.as_ref(), op.loc.as_ref()],
                ),
                _ => ctx.report_at(
                    format!("Variable \"${var_name}\" is not defined."),
                    [usage.variable.loc.as_ref()],
                ),
            }
        }
    }
}
