use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Every argument passed must be defined by the field or directive.
#[derive(Default)]
pub struct KnownArgumentNames;

impl ValidationRule for KnownArgumentNames {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        match node {
            Node::Field(field) => {
                let type_info = ctx.type_info();
                let (Some(field_def), Some(parent_type)) = (type_info.field_def(), type_info.parent_type()) else {
                    return;
                };
                for arg in &field.arguments {
                    if field_def.argument(arg.name.as_str()).is_none() {
                        ctx.report_at(
                            format!(
                                "Unknown argument \"{}\" on field \"{}\" of type \"{}\".",
                                arg.name,
                                field.name,
                                parent_type.name(),
                            ),
                            [arg.loc.as_ref()],
                        );
                    }
                }
            },

            Node::Directive(directive) => {
                let Some(directive_def) = ctx.schema().directive(directive.name.as_str()) else {
                    return;
                };
                for arg in &directive.arguments {
                    if directive_def.argument(arg.name.as_str()).is_none() {
                        ctx.report_at(
                            format!("Unknown argument \"{}\" on directive \"@{}\".", arg.name, directive.name),
                            [arg.loc.as_ref()],
                        );
                    }
                }
            },

            _ => {},
        }
    }
}
