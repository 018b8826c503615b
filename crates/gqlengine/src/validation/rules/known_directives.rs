use crate::types::DirectiveLocation;
use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationType;

/// Every directive used must be defined by the schema and allowed where it
/// appears.
#[derive(Default)]
pub struct KnownDirectives;

impl ValidationRule for KnownDirectives {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let (directives, location, placement) = match node {
            Node::OperationDefinition(op) => {
                let location = match op.operation {
                    OperationType::Query => DirectiveLocation::Query,
                    OperationType::Mutation => DirectiveLocation::Mutation,
                    OperationType::Subscription => DirectiveLocation::Subscription,
                };
                (&op.directives, location, "operation")
            },
            Node::Field(field) => (&field.directives, DirectiveLocation::Field, "field"),
            Node::FragmentSpread(spread) => {
                (&spread.directives, DirectiveLocation::FragmentSpread, "fragment")
            },
            Node::InlineFragment(inline) => {
                (&inline.directives, DirectiveLocation::InlineFragment, "fragment")
            },
            Node::FragmentDefinition(frag) => {
                (&frag.directives, DirectiveLocation::FragmentDefinition, "fragment")
            },
            _ => return,
        };
        check_directives(ctx, directives, location, placement);
    }
}

fn check_directives(
    ctx: &mut ValidationContext<'_>,
    directives: &[ast::Directive],
    location: DirectiveLocation,
    placement: &str,
) {
    for directive in directives {
        match ctx.schema().directive(directive.name.as_str()) {
            None => ctx.report_at(
                format!("Unknown directive \"{}\".", directive.name),
                [directive.loc.as_ref()],
            ),
            Some(directive_def) if !directive_def.is_valid_at(location) => ctx.report_at(
                format!("Directive \"{}\" may not be used on \"{placement}\".", directive.name),
                [directive.loc.as_ref()],
            ),
            Some(_) => {},
        }
    }
}
