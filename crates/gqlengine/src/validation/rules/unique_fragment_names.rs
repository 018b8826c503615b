use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlengine_parser::Location;
use std::collections::HashMap;

/// Fragment names must be unique within a document.
#[derive(Default)]
pub struct UniqueFragmentNames {
    known: HashMap<String, Option<Location>>,
}

impl ValidationRule for UniqueFragmentNames {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::FragmentDefinition(frag) = node else {
            return;
        };
        match self.known.get(frag.name.as_str()) {
            Some(first) => ctx.report_at(
                format!("There can only be one fragment named \"{}\".", frag.name),
                [first.as_ref(), frag.name.loc.as_ref()],
            ),
            None => {
                self.known.insert(frag.name.value.clone(), frag.name.loc.clone());
            },
        }
    }
}
