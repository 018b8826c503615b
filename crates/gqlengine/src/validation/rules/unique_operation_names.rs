use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlengine_parser::Location;
use std::collections::HashMap;

/// Operation names must be unique within a document.
#[derive(Default)]
pub struct UniqueOperationNames {
    known: HashMap<String, Option<Location>>,
}

impl ValidationRule for UniqueOperationNames {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::OperationDefinition(op) = node else {
            return;
        };
        let Some(name) = &op.name else {
            return;
        };
        match self.known.get(name.as_str()) {
            Some(first) => ctx.report_at(
                format!("There can only be one operation named \"{name}\"."),
                [first.as_ref(), name.loc.as_ref()],
            ),
            None => {
                self.known.insert(name.value.clone(), name.loc.clone());
            },
        }
    }
}
