use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// An anonymous operation must be the only operation in its document.
#[derive(Default)]
pub struct LoneAnonymousOperation {
    operation_count: usize,
}

impl ValidationRule for LoneAnonymousOperation {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        match node {
            Node::Document(doc) => self.operation_count = doc.operations().count(),
            Node::OperationDefinition(op) if op.name.is_none() && self.operation_count > 1 => {
                ctx.report_at(
                    "This anonymous operation must be the only defined operation.",
                    [op.loc.as_ref()],
                );
            },
            _ => {},
        }
    }
}
