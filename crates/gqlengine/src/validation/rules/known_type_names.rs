use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlengine_parser::ast;

/// Every type named by a variable definition or type condition must exist.
#[derive(Default)]
pub struct KnownTypeNames;

impl ValidationRule for KnownTypeNames {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let named_type = match node {
            Node::VariableDefinition(var_def) => innermost_named(&var_def.var_type),
            Node::InlineFragment(inline) => match &inline.type_condition {
                Some(cond) => cond,
                None => return,
            },
            Node::FragmentDefinition(frag) => &frag.type_condition,
            _ => return,
        };
        if ctx.schema().type_named(named_type.name.as_str()).is_none() {
            ctx.report_at(
                format!("Unknown type \"{}\".", named_type.name),
                [named_type.loc.as_ref()],
            );
        }
    }
}

fn innermost_named(type_: &ast::Type) -> &ast::NamedType {
    match type_ {
        ast::Type::Named(named) => named,
        ast::Type::List(list) => innermost_named(&list.of_type),
        ast::Type::NonNull(non_null) => innermost_named(&non_null.of_type),
    }
}
