use crate::types::InputValueDefinition;
use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlengine_parser::ast;
use indexmap::IndexMap;

/// Every non-null argument of a field or directive must be passed.
#[derive(Default)]
pub struct ProvidedNonNullArguments;

impl ValidationRule for ProvidedNonNullArguments {
    fn leave<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        match node {
            Node::Field(field) => {
                let Some(field_def) = ctx.type_info().field_def() else {
                    return;
                };
                for arg_def in missing_non_null(field_def.arguments(), &field.arguments) {
                    ctx.report_at(
                        format!(
                            "Field \"{}\" argument \"{}\" of type \"{}\" is required but not provided.",
                            field.name,
                            arg_def.name(),
                            arg_def.value_type(),
                        ),
                        [field.loc.as_ref()],
                    );
                }
            },

            Node::Directive(directive) => {
                let Some(directive_def) = ctx.schema().directive(directive.name.as_str()) else {
                    return;
                };
                for arg_def in missing_non_null(directive_def.arguments(), &directive.arguments) {
                    ctx.report_at(
                        format!(
                            "Directive \"@{}\" argument \"{}\" of type \"{}\" is required but not provided.",
                            directive.name,
                            arg_def.name(),
                            arg_def.value_type(),
                        ),
                        [directive.loc.as_ref()],
                    );
                }
            },

            _ => {},
        }
    }
}

fn missing_non_null<'d>(
    arg_defs: &'d IndexMap<String, InputValueDefinition>,
    args: &[ast::Argument],
) -> Vec<&'d InputValueDefinition> {
    arg_defs.values()
        .filter(|arg_def| arg_def.value_type().is_non_null())
        .filter(|arg_def| !args.iter().any(|arg| arg.name.value == arg_def.name()))
        .collect()
}
