use crate::schema::Schema;
use crate::types::NamedType;
use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// A fragment may only be spread where some object could satisfy both the
/// fragment's type condition and the enclosing type.
#[derive(Default)]
pub struct PossibleFragmentSpreads;

impl ValidationRule for PossibleFragmentSpreads {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let schema = ctx.schema();
        let Some(parent_type) = ctx.type_info().parent_type() else {
            return;
        };

        match node {
            Node::InlineFragment(inline) => {
                let Some(cond) = &inline.type_condition else {
                    return;
                };
                let Some(frag_type) = schema.type_named(cond.name.as_str()) else {
                    return;
                };
                if !types_overlap(schema, frag_type, parent_type) {
                    ctx.report_at(
                        format!(
                            "Fragment cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
                            parent_type.name(),
                            frag_type.name(),
                        ),
                        [inline.loc.as_ref()],
                    );
                }
            },

            Node::FragmentSpread(spread) => {
                let Some(frag_type) = ctx.fragment(spread.name.as_str())
                    .and_then(|frag| schema.type_named(frag.type_condition.name.as_str()))
                else {
                    return;
                };
                if !types_overlap(schema, frag_type, parent_type) {
                    ctx.report_at(
                        format!(
                            "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
                            spread.name,
                            parent_type.name(),
                            frag_type.name(),
                        ),
                        [spread.loc.as_ref()],
                    );
                }
            },

            _ => {},
        }
    }
}

/// `true` if some object type could be of both composite types. Non-composite
/// conditions are left to [`FragmentsOnCompositeTypes`](super::FragmentsOnCompositeTypes).
fn types_overlap(schema: &Schema, type_a: &NamedType, type_b: &NamedType) -> bool {
    if !type_a.is_composite() || !type_b.is_composite() || type_a.name() == type_b.name() {
        return true;
    }
    match (type_a, type_b) {
        (NamedType::Object(_), NamedType::Object(_)) => false,
        (NamedType::Object(object), abstract_type) | (abstract_type, NamedType::Object(object)) => {
            schema.is_possible_type(abstract_type.name(), object.name())
        },
        _ => schema.possible_types(type_a.name())
            .iter()
            .any(|object| schema.is_possible_type(type_b.name(), object.name())),
    }
}
