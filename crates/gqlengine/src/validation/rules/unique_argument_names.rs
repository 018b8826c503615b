use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlengine_parser::ast;
use std::collections::HashMap;

/// A field or directive may not be passed the same argument twice.
#[derive(Default)]
pub struct UniqueArgumentNames;

impl ValidationRule for UniqueArgumentNames {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        match node {
            Node::Field(field) => check_arguments(ctx, &field.arguments),
            Node::Directive(directive) => check_arguments(ctx, &directive.arguments),
            _ => {},
        }
    }
}

fn check_arguments(ctx: &mut ValidationContext<'_>, arguments: &[ast::Argument]) {
    let mut known: HashMap<&str, &ast::Name> = HashMap::new();
    for arg in arguments {
        match known.get(arg.name.as_str()) {
            Some(first) => ctx.report_at(
                format!("There can be only one argument named \"{}\".", arg.name),
                [first.loc.as_ref(), arg.name.loc.as_ref()],
            ),
            None => {
                known.insert(arg.name.as_str(), &arg.name);
            },
        }
    }
}
