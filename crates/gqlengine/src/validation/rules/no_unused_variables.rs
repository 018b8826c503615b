use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashSet;

/// Every variable an operation defines must be used by it or by a fragment
/// it spreads.
#[derive(Default)]
pub struct NoUnusedVariables;

impl ValidationRule for NoUnusedVariables {
    fn leave<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::OperationDefinition(op) = node else {
            return;
        };
        let used: HashSet<&str> = ctx.recursive_variable_usages(op)
            .into_iter()
            .map(|usage| usage.variable.name.as_str())
            .collect();
        for var_def in &op.variable_definitions {
            let var_name = var_def.variable.name.as_str();
            if !used.contains(var_name) {
                ctx.report_at(
                    format!("Variable \"${var_name}\" is never used."),
                    [var_def.loc.as_ref()],
                );
            }
        }
    }
}
