use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Fragments may only condition on objects, interfaces and unions.
#[derive(Default)]
pub struct FragmentsOnCompositeTypes;

impl ValidationRule for FragmentsOnCompositeTypes {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let schema = ctx.schema();
        let is_non_composite = |type_name: &str| {
            schema.type_named(type_name).is_some_and(|named| !named.is_composite())
        };

        match node {
            Node::InlineFragment(inline) => {
                let Some(cond) = &inline.type_condition else {
                    return;
                };
                if is_non_composite(cond.name.as_str()) {
                    ctx.report_at(
                        format!("Fragment cannot condition on non composite type \"{}\".", cond.name),
                        [cond.loc.as_ref()],
                    );
                }
            },

            Node::FragmentDefinition(frag) => {
                let cond = &frag.type_condition;
                if is_non_composite(cond.name.as_str()) {
                    ctx.report_at(
                        format!(
                            "Fragment \"{}\" cannot condition on non composite type \"{}\".",
                            frag.name,
                            cond.name,
                        ),
                        [cond.loc.as_ref()],
                    );
                }
            },

            _ => {},
        }
    }
}
